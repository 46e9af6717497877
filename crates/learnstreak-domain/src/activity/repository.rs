use async_trait::async_trait;
use chrono::{FixedOffset, NaiveDate};

use super::ActivityRecord;
use crate::shared::{DomainError, UserId};
use crate::streak::StreakType;

#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Append an activity to the user's log.
    async fn append(&self, record: &ActivityRecord) -> Result<(), DomainError>;

    /// All activities of a user, oldest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<ActivityRecord>, DomainError>;

    /// Users with at least one recorded activity.
    async fn list_user_ids(&self) -> Result<Vec<UserId>, DomainError>;

    /// Calendar dates of the user's activities counting toward `streak_type`.
    ///
    /// Dates may repeat; the streak calculator collapses same-day entries.
    async fn activity_dates(
        &self,
        user_id: &UserId,
        streak_type: StreakType,
        offset: FixedOffset,
    ) -> Result<Vec<NaiveDate>, DomainError> {
        let records = self.find_by_user(user_id).await?;
        Ok(records
            .iter()
            .filter(|r| r.activity_type().counts_toward(streak_type))
            .map(|r| r.activity_date(&offset))
            .collect())
    }
}
