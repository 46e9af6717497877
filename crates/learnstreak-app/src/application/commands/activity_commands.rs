use serde::{Deserialize, Serialize};

use super::command_handler::Command;
use learnstreak_domain::streak::ActivityType;

/// Record one qualifying activity for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordActivityCommand {
    pub user_id: String,
    pub activity_type: ActivityType,
    /// Falls back to the activity type's default award when absent
    #[serde(default)]
    pub points_earned: Option<u32>,
}

impl Command for RecordActivityCommand {}

impl RecordActivityCommand {
    pub fn new(user_id: impl Into<String>, activity_type: ActivityType) -> Self {
        Self {
            user_id: user_id.into(),
            activity_type,
            points_earned: None,
        }
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points_earned = Some(points);
        self
    }
}
