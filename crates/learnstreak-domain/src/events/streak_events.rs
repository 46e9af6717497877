use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::events::DomainEvent;
use crate::shared::{ActivityId, UserId};
use crate::streak::ActivityType;

macro_rules! impl_domain_event {
    ($type:ty) => {
        impl DomainEvent for $type {
            fn as_any(&self) -> &(dyn Any + Send + Sync) {
                self
            }

            fn event_type_name(&self) -> &'static str {
                std::any::type_name::<Self>()
            }
        }
    };
}

/// Event fired after an activity has been appended to a user's log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecorded {
    pub activity_id: ActivityId,
    pub user_id: UserId,
    pub activity_type: ActivityType,
    pub points_earned: u32,
    pub streak_bonus: u32,
    pub current_streak: u32,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(ActivityRecorded);

/// Event fired once per milestone crossed by a recorded activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneUnlocked {
    pub user_id: UserId,
    pub milestone_days: u32,
    pub title: String,
    pub points_reward: u32,
    pub current_streak: u32,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(MilestoneUnlocked);

/// Event fired when the first activity after a lapse starts a new streak
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakReset {
    pub user_id: UserId,
    pub previous_longest: u32,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(StreakReset);
