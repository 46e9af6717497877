use serde::{Deserialize, Serialize};

use learnstreak_domain::streak::{Milestone, MilestoneStatus, StreakSummary, StreakType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakDataDto {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_activity_date: Option<String>, // YYYY-MM-DD
    pub streak_type: StreakType,
    pub is_active: bool,
    pub next_milestone: u32,
    pub days_to_next_milestone: u32,
}

impl From<&StreakSummary> for StreakDataDto {
    fn from(summary: &StreakSummary) -> Self {
        Self {
            current_streak: summary.current_streak(),
            longest_streak: summary.longest_streak(),
            last_activity_date: summary
                .last_activity_date()
                .map(|d| d.format("%Y-%m-%d").to_string()),
            streak_type: summary.streak_type(),
            is_active: summary.is_active(),
            next_milestone: summary.next_milestone(),
            days_to_next_milestone: summary.days_to_next_milestone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDto {
    pub days: u32,
    pub title: String,
    pub description: String,
    pub badge_icon: String,
    pub points_reward: u32,
    // Absent for the bare catalog
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_unlocked: Option<bool>,
}

impl From<&Milestone> for MilestoneDto {
    fn from(milestone: &Milestone) -> Self {
        Self {
            days: milestone.days,
            title: milestone.title.to_string(),
            description: milestone.description.to_string(),
            badge_icon: milestone.badge_icon.to_string(),
            points_reward: milestone.points_reward,
            is_unlocked: None,
        }
    }
}

impl From<MilestoneStatus> for MilestoneDto {
    fn from(status: MilestoneStatus) -> Self {
        Self {
            days: status.days,
            title: status.title,
            description: status.description,
            badge_icon: status.badge_icon,
            points_reward: status.points_reward,
            is_unlocked: Some(status.is_unlocked),
        }
    }
}

/// Payload for a single user's streak view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResponseDto {
    #[serde(flatten)]
    pub streak: StreakDataDto,
    pub total_active_days: u32,
    pub unlocked_milestones: Vec<MilestoneDto>,
    pub streak_bonus: u32,
    pub all_milestones: Vec<MilestoneDto>,
    pub status_message: String,
}

/// Payload returned after an activity is recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordActivityResultDto {
    pub streak_data: StreakDataDto,
    /// Base points plus streak bonus
    pub points_earned: u32,
    pub streak_bonus: u32,
    pub new_milestones: Vec<MilestoneDto>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakLeaderboardEntryDto {
    pub user_id: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_active_days: u32,
    pub last_activity_date: Option<String>,
    pub streak_display: String,
}
