use serde::{Deserialize, Serialize};

/// Streak-length threshold that unlocks a badge and a point reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub days: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub badge_icon: &'static str,
    pub points_reward: u32,
}

/// Catalog entry annotated against one streak length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneStatus {
    pub days: u32,
    pub title: String,
    pub description: String,
    pub badge_icon: String,
    pub points_reward: u32,
    pub is_unlocked: bool,
}

impl MilestoneStatus {
    fn evaluate(milestone: &Milestone, current_streak: u32) -> Self {
        Self {
            days: milestone.days,
            title: milestone.title.to_string(),
            description: milestone.description.to_string(),
            badge_icon: milestone.badge_icon.to_string(),
            points_reward: milestone.points_reward,
            is_unlocked: current_streak >= milestone.days,
        }
    }
}

/// Ascending by `days`; `points_reward` never decreases.
pub static MILESTONES: [Milestone; 5] = [
    Milestone {
        days: 3,
        title: "Getting Started",
        description: "3-day streak achieved!",
        badge_icon: "🔥",
        points_reward: 10,
    },
    Milestone {
        days: 7,
        title: "Week Warrior",
        description: "7-day streak! You're on fire!",
        badge_icon: "🔥🔥",
        points_reward: 25,
    },
    Milestone {
        days: 14,
        title: "Two Week Champion",
        description: "14 days of dedication!",
        badge_icon: "🔥🔥🔥",
        points_reward: 50,
    },
    Milestone {
        days: 30,
        title: "Monthly Master",
        description: "30 days! You're unstoppable!",
        badge_icon: "👑",
        points_reward: 100,
    },
    Milestone {
        days: 100,
        title: "Century Streak",
        description: "100 days! Legendary status!",
        badge_icon: "🏆",
        points_reward: 500,
    },
];

pub fn all_milestones() -> &'static [Milestone] {
    &MILESTONES
}

/// First milestone strictly above `current_streak`, or the highest one when
/// every threshold has been passed.
pub fn next_milestone_for(current_streak: u32) -> &'static Milestone {
    MILESTONES
        .iter()
        .find(|m| m.days > current_streak)
        .unwrap_or(&MILESTONES[MILESTONES.len() - 1])
}

/// The whole catalog with `is_unlocked` derived for `current_streak`.
pub fn unlocked_milestones(current_streak: u32) -> Vec<MilestoneStatus> {
    MILESTONES
        .iter()
        .map(|m| MilestoneStatus::evaluate(m, current_streak))
        .collect()
}

/// Milestones crossed when a streak moves from `previous_streak` to
/// `current_streak`: `previous < days <= current`.
pub fn newly_unlocked(previous_streak: u32, current_streak: u32) -> Vec<&'static Milestone> {
    MILESTONES
        .iter()
        .filter(|m| previous_streak < m.days && m.days <= current_streak)
        .collect()
}
