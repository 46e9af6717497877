mod bonus;
mod calculator;
mod milestone;
mod value_objects;


pub use bonus::{bonus_points, qualifies_for_bonus, BONUS_THRESHOLD_DAYS};
pub use calculator::{
    activity_date, compute_streak, compute_streak_from_timestamps, compute_streak_on,
    total_active_days,
};
pub use milestone::{
    all_milestones, newly_unlocked, next_milestone_for, unlocked_milestones, Milestone,
    MilestoneStatus, MILESTONES,
};
pub use value_objects::{ActivityType, StreakSummary, StreakType};
