use async_trait::async_trait;
use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::application::services::{format_streak_display, Locale};
use learnstreak_domain::events::event_bus::EventHandler;
use learnstreak_domain::events::streak_events::{MilestoneUnlocked, StreakReset};
use learnstreak_domain::shared::DomainError;

/// Logs milestone unlocks and streak resets as they are published
#[derive(Clone)]
pub struct StreakAnnouncementHandler {
    locale: Locale,
    announced: Arc<AtomicUsize>,
}

impl StreakAnnouncementHandler {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            announced: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of events announced so far (shared between clones)
    pub fn announced(&self) -> usize {
        self.announced.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl EventHandler<MilestoneUnlocked> for StreakAnnouncementHandler {
    async fn handle(&self, event: &MilestoneUnlocked) -> Result<(), DomainError> {
        info!(
            "🏅 {} unlocked '{}' ({}) at {}, reward {} pts",
            event.user_id,
            event.title,
            format_streak_display(event.milestone_days, self.locale),
            format_streak_display(event.current_streak, self.locale),
            event.points_reward
        );
        self.announced.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

#[async_trait]
impl EventHandler<StreakReset> for StreakAnnouncementHandler {
    async fn handle(&self, event: &StreakReset) -> Result<(), DomainError> {
        info!(
            "{} started a new streak (previous best: {})",
            event.user_id,
            format_streak_display(event.previous_longest, self.locale)
        );
        self.announced.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
