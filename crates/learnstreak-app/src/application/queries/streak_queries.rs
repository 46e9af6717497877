use chrono::{DateTime, Utc};
use log::info;
use std::sync::Arc;

use crate::application::config::EngagementConfig;
use crate::application::dtos::{
    MilestoneDto, StreakDataDto, StreakLeaderboardEntryDto, StreakResponseDto,
};
use crate::application::services::{format_streak_display, status_message};
use learnstreak_domain::activity::ActivityStore;
use learnstreak_domain::shared::{DomainError, UserId};
use learnstreak_domain::streak::{
    activity_date, all_milestones, bonus_points, compute_streak_on, total_active_days,
    unlocked_milestones, StreakType,
};

pub struct StreakQueries {
    activity_store: Arc<dyn ActivityStore>,
    config: Arc<EngagementConfig>,
}

impl StreakQueries {
    pub fn new(activity_store: Arc<dyn ActivityStore>, config: Arc<EngagementConfig>) -> Self {
        Self {
            activity_store,
            config,
        }
    }

    /// Get the full streak view for one user
    ///
    /// A user with no recorded activity gets an empty, inactive streak.
    pub async fn get_streak(
        &self,
        user_id: &str,
        streak_type: StreakType,
    ) -> Result<StreakResponseDto, DomainError> {
        self.get_streak_at(user_id, streak_type, Utc::now()).await
    }

    /// Streak view as seen at `now`
    pub async fn get_streak_at(
        &self,
        user_id: &str,
        streak_type: StreakType,
        now: DateTime<Utc>,
    ) -> Result<StreakResponseDto, DomainError> {
        let user_id = UserId::from_string(user_id);
        if user_id.is_empty() {
            return Err(DomainError::Validation("userId is required".to_string()));
        }

        let offset = self.config.utc_offset();
        let dates = self
            .activity_store
            .activity_dates(&user_id, streak_type, offset)
            .await?;
        let summary = compute_streak_on(&dates, streak_type, activity_date(now, &offset));

        info!(
            "[streak] {} ({}): current={}, longest={}",
            user_id,
            streak_type,
            summary.current_streak(),
            summary.longest_streak()
        );

        Ok(StreakResponseDto {
            total_active_days: total_active_days(&dates),
            unlocked_milestones: unlocked_milestones(summary.current_streak())
                .into_iter()
                .map(MilestoneDto::from)
                .collect(),
            streak_bonus: bonus_points(summary.current_streak()),
            all_milestones: all_milestones().iter().map(MilestoneDto::from).collect(),
            status_message: status_message(&summary, self.config.locale),
            streak: StreakDataDto::from(&summary),
        })
    }

    /// Get streak rows for every known user, longest current streak first
    pub async fn get_all_streaks(
        &self,
        streak_type: StreakType,
    ) -> Result<Vec<StreakLeaderboardEntryDto>, DomainError> {
        self.get_all_streaks_at(streak_type, Utc::now()).await
    }

    pub async fn get_all_streaks_at(
        &self,
        streak_type: StreakType,
        now: DateTime<Utc>,
    ) -> Result<Vec<StreakLeaderboardEntryDto>, DomainError> {
        let offset = self.config.utc_offset();
        let today = activity_date(now, &offset);
        let user_ids = self.activity_store.list_user_ids().await?;

        let mut entries = Vec::with_capacity(user_ids.len());
        for user_id in user_ids {
            let dates = self
                .activity_store
                .activity_dates(&user_id, streak_type, offset)
                .await?;
            let summary = compute_streak_on(&dates, streak_type, today);

            entries.push(StreakLeaderboardEntryDto {
                user_id: user_id.to_string(),
                current_streak: summary.current_streak(),
                longest_streak: summary.longest_streak(),
                total_active_days: total_active_days(&dates),
                last_activity_date: summary
                    .last_activity_date()
                    .map(|d| d.format("%Y-%m-%d").to_string()),
                streak_display: format_streak_display(summary.current_streak(), self.config.locale),
            });
        }

        entries.sort_by(|a, b| {
            b.current_streak
                .cmp(&a.current_streak)
                .then_with(|| b.longest_streak.cmp(&a.longest_streak))
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        Ok(entries)
    }
}
