use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{ActivityId, DomainError, UserId};
use crate::streak::{activity_date, ActivityType};

/// One qualifying user action, as kept by the activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    id: ActivityId,
    user_id: UserId,
    activity_type: ActivityType,
    points_earned: u32,
    streak_bonus: u32,
    recorded_at: DateTime<Utc>,
}

impl ActivityRecord {
    pub fn new(
        user_id: UserId,
        activity_type: ActivityType,
        points_earned: u32,
        streak_bonus: u32,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if user_id.is_empty() {
            return Err(DomainError::Validation(
                "User id cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: ActivityId::new(),
            user_id,
            activity_type,
            points_earned,
            streak_bonus,
            recorded_at,
        })
    }

    pub fn id(&self) -> &ActivityId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn activity_type(&self) -> ActivityType {
        self.activity_type
    }

    pub fn points_earned(&self) -> u32 {
        self.points_earned
    }

    pub fn streak_bonus(&self) -> u32 {
        self.streak_bonus
    }

    pub fn total_points(&self) -> u32 {
        self.points_earned + self.streak_bonus
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Calendar date of the activity in `offset`.
    pub fn activity_date(&self, offset: &FixedOffset) -> NaiveDate {
        activity_date(self.recorded_at, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_record_requires_user_id() {
        let result = ActivityRecord::new(
            UserId::from_string(""),
            ActivityType::Chat,
            2,
            0,
            Utc::now(),
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_new_record_totals_points() {
        let record = ActivityRecord::new(
            UserId::from_string("user-1"),
            ActivityType::Tutorial,
            10,
            20,
            Utc::now(),
        )
        .unwrap();

        assert_eq!(record.user_id().as_str(), "user-1");
        assert_eq!(record.activity_type(), ActivityType::Tutorial);
        assert_eq!(record.total_points(), 30);
    }

    #[test]
    fn test_activity_date_uses_offset() {
        let recorded_at = Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap();
        let record = ActivityRecord::new(
            UserId::from_string("user-1"),
            ActivityType::Login,
            0,
            0,
            recorded_at,
        )
        .unwrap();

        let utc = FixedOffset::east_opt(0).unwrap();
        let ict = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(
            record.activity_date(&utc),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            record.activity_date(&ict),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
        );
    }
}
