use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::commands::activity_commands::RecordActivityCommand;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::config::EngagementConfig;
use crate::application::dtos::{MilestoneDto, RecordActivityResultDto, StreakDataDto};
use crate::application::services::record_message;
use learnstreak_domain::activity::{ActivityRecord, ActivityStore};
use learnstreak_domain::events::streak_events::{ActivityRecorded, MilestoneUnlocked, StreakReset};
use learnstreak_domain::events::EventBus;
use learnstreak_domain::shared::{DomainError, UserId};
use learnstreak_domain::streak::{
    activity_date, bonus_points, compute_streak_on, newly_unlocked, StreakType,
};

/// Record activity command handler
///
/// Appends the activity, awards the streak bonus earned by the resulting
/// overall streak and announces every milestone crossed on the way.
/// Records for the same user are handled one at a time.
pub struct RecordActivityCommandHandler {
    activity_store: Arc<dyn ActivityStore>,
    event_bus: Arc<dyn EventBus>,
    config: Arc<EngagementConfig>,
    user_locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl RecordActivityCommandHandler {
    pub fn new(
        activity_store: Arc<dyn ActivityStore>,
        event_bus: Arc<dyn EventBus>,
        config: Arc<EngagementConfig>,
    ) -> Self {
        Self {
            activity_store,
            event_bus,
            config,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn user_lock(&self, user_id: &UserId) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        locks.entry(user_id.clone()).or_default().clone()
    }

    /// Record an activity as if it happened at `now`
    pub async fn record_at(
        &self,
        cmd: RecordActivityCommand,
        now: DateTime<Utc>,
    ) -> Result<RecordActivityResultDto, DomainError> {
        info!(
            "Handling RecordActivityCommand: user={}, type={}",
            cmd.user_id, cmd.activity_type
        );

        // 1. Validate input
        let user_id = UserId::from_string(&cmd.user_id);
        if user_id.is_empty() {
            return Err(DomainError::Validation(
                "userId and activityType are required".to_string(),
            ));
        }

        // Held until the events are out, so the before/after diff is per record
        let lock = self.user_lock(&user_id).await;
        let _guard = lock.lock().await;

        let offset = self.config.utc_offset();
        let today = activity_date(now, &offset);

        // 2. Snapshot the overall streak before recording
        let mut dates = self
            .activity_store
            .activity_dates(&user_id, StreakType::Overall, offset)
            .await?;
        let before = compute_streak_on(&dates, StreakType::Overall, today);

        // 3. Bonus follows the streak this activity produces
        dates.push(today);
        let projected = compute_streak_on(&dates, StreakType::Overall, today);
        let streak_bonus = bonus_points(projected.current_streak());
        let points = cmd
            .points_earned
            .unwrap_or_else(|| cmd.activity_type.default_points());

        let record = ActivityRecord::new(user_id.clone(), cmd.activity_type, points, streak_bonus, now)?;
        self.activity_store.append(&record).await?;

        // 4. Recompute from the store
        let dates = self
            .activity_store
            .activity_dates(&user_id, StreakType::Overall, offset)
            .await?;
        let after = compute_streak_on(&dates, StreakType::Overall, today);

        // 5. Diff milestones and publish events
        let unlocked = newly_unlocked(before.current_streak(), after.current_streak());

        info!(
            "Activity recorded: user={}, streak {} -> {}, points={}, bonus={}, new milestones={}",
            user_id,
            before.current_streak(),
            after.current_streak(),
            points,
            streak_bonus,
            unlocked.len()
        );

        self.event_bus
            .publish(Box::new(ActivityRecorded {
                activity_id: record.id().clone(),
                user_id: user_id.clone(),
                activity_type: record.activity_type(),
                points_earned: points,
                streak_bonus,
                current_streak: after.current_streak(),
                occurred_at: now,
            }))
            .await?;

        if !before.is_active() && before.longest_streak() > 0 && after.is_active() {
            self.event_bus
                .publish(Box::new(StreakReset {
                    user_id: user_id.clone(),
                    previous_longest: before.longest_streak(),
                    occurred_at: now,
                }))
                .await?;
        }

        for milestone in &unlocked {
            self.event_bus
                .publish(Box::new(MilestoneUnlocked {
                    user_id: user_id.clone(),
                    milestone_days: milestone.days,
                    title: milestone.title.to_string(),
                    points_reward: milestone.points_reward,
                    current_streak: after.current_streak(),
                    occurred_at: now,
                }))
                .await?;
        }

        // 6. Return result
        Ok(RecordActivityResultDto {
            streak_data: StreakDataDto::from(&after),
            points_earned: record.total_points(),
            streak_bonus,
            new_milestones: unlocked.into_iter().map(MilestoneDto::from).collect(),
            message: record_message(after.current_streak(), self.config.locale),
        })
    }
}

#[async_trait]
impl CommandHandler<RecordActivityCommand> for RecordActivityCommandHandler {
    type Result = RecordActivityResultDto;

    async fn handle(&self, cmd: RecordActivityCommand) -> Result<Self::Result, DomainError> {
        self.record_at(cmd, Utc::now()).await
    }
}
