use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::milestone::next_milestone_for;
use crate::shared::DomainError;

/// Activity category a streak summary is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakType {
    Learning,
    Chat,
    #[default]
    Overall,
}

impl StreakType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreakType::Learning => "learning",
            StreakType::Chat => "chat",
            StreakType::Overall => "overall",
        }
    }
}

impl fmt::Display for StreakType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreakType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "learning" => Ok(StreakType::Learning),
            "chat" => Ok(StreakType::Chat),
            "overall" => Ok(StreakType::Overall),
            other => Err(DomainError::InvalidInput(format!(
                "Unknown streak type: {}",
                other
            ))),
        }
    }
}

/// User action that counts toward a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Login,
    Tutorial,
    Chat,
    Subscription,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Login => "login",
            ActivityType::Tutorial => "tutorial",
            ActivityType::Chat => "chat",
            ActivityType::Subscription => "subscription",
        }
    }

    /// Whether this activity extends a streak of the given type.
    /// Every activity counts for `Overall`.
    pub fn counts_toward(&self, streak_type: StreakType) -> bool {
        match streak_type {
            StreakType::Overall => true,
            StreakType::Learning => matches!(self, ActivityType::Tutorial),
            StreakType::Chat => matches!(self, ActivityType::Chat),
        }
    }

    /// Points awarded for the activity itself, before any streak bonus.
    pub fn default_points(&self) -> u32 {
        match self {
            ActivityType::Login => 0,
            ActivityType::Tutorial => 10,
            ActivityType::Chat => 2,
            ActivityType::Subscription => 30,
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "login" => Ok(ActivityType::Login),
            "tutorial" => Ok(ActivityType::Tutorial),
            "chat" => Ok(ActivityType::Chat),
            "subscription" => Ok(ActivityType::Subscription),
            other => Err(DomainError::InvalidInput(format!(
                "Unknown activity type: {}",
                other
            ))),
        }
    }
}

/// Result of a streak computation.
///
/// Always built through [`StreakSummary::new`] or [`StreakSummary::empty`] so
/// that `is_active` and the milestone fields stay consistent with
/// `current_streak`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    current_streak: u32,
    longest_streak: u32,
    last_activity_date: Option<NaiveDate>,
    streak_type: StreakType,
    is_active: bool,
    next_milestone: u32,
    days_to_next_milestone: u32,
}

impl StreakSummary {
    pub fn new(
        current_streak: u32,
        longest_streak: u32,
        last_activity_date: Option<NaiveDate>,
        streak_type: StreakType,
    ) -> Self {
        let longest_streak = longest_streak.max(current_streak);
        let next_milestone = next_milestone_for(current_streak).days;

        Self {
            current_streak,
            longest_streak,
            last_activity_date,
            streak_type,
            is_active: current_streak > 0,
            next_milestone,
            days_to_next_milestone: next_milestone.saturating_sub(current_streak),
        }
    }

    pub fn empty(streak_type: StreakType) -> Self {
        Self::new(0, 0, None, streak_type)
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    pub fn last_activity_date(&self) -> Option<NaiveDate> {
        self.last_activity_date
    }

    pub fn streak_type(&self) -> StreakType {
        self.streak_type
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn next_milestone(&self) -> u32 {
        self.next_milestone
    }

    /// Zero once the highest milestone is exceeded; that means "no further
    /// milestone", not "milestone reached".
    pub fn days_to_next_milestone(&self) -> u32 {
        self.days_to_next_milestone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_type_parsing() {
        assert_eq!("learning".parse::<StreakType>().unwrap(), StreakType::Learning);
        assert_eq!(" Chat ".parse::<StreakType>().unwrap(), StreakType::Chat);
        assert_eq!("OVERALL".parse::<StreakType>().unwrap(), StreakType::Overall);
        assert!(matches!(
            "weekly".parse::<StreakType>(),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_streak_type_defaults_to_overall() {
        assert_eq!(StreakType::default(), StreakType::Overall);
    }

    #[test]
    fn test_activity_type_counts_toward() {
        assert!(ActivityType::Tutorial.counts_toward(StreakType::Learning));
        assert!(!ActivityType::Chat.counts_toward(StreakType::Learning));
        assert!(ActivityType::Chat.counts_toward(StreakType::Chat));
        assert!(!ActivityType::Login.counts_toward(StreakType::Chat));
        assert!(ActivityType::Subscription.counts_toward(StreakType::Overall));
        assert!(ActivityType::Login.counts_toward(StreakType::Overall));
    }

    #[test]
    fn test_activity_type_default_points() {
        assert_eq!(ActivityType::Tutorial.default_points(), 10);
        assert_eq!(ActivityType::Chat.default_points(), 2);
        assert_eq!(ActivityType::Subscription.default_points(), 30);
        assert_eq!(ActivityType::Login.default_points(), 0);
    }

    #[test]
    fn test_activity_type_serializes_lowercase() {
        let json = serde_json::to_string(&ActivityType::Subscription).unwrap();
        assert_eq!(json, "\"subscription\"");
    }

    #[test]
    fn test_empty_summary() {
        let summary = StreakSummary::empty(StreakType::Chat);
        assert_eq!(summary.current_streak(), 0);
        assert_eq!(summary.longest_streak(), 0);
        assert_eq!(summary.last_activity_date(), None);
        assert_eq!(summary.streak_type(), StreakType::Chat);
        assert!(!summary.is_active());
        assert_eq!(summary.next_milestone(), 3);
        assert_eq!(summary.days_to_next_milestone(), 3);
    }

    #[test]
    fn test_summary_past_last_milestone() {
        let summary = StreakSummary::new(120, 120, None, StreakType::Overall);
        assert_eq!(summary.next_milestone(), 100);
        assert_eq!(summary.days_to_next_milestone(), 0);
    }

    #[test]
    fn test_summary_lifts_longest_to_current() {
        let summary = StreakSummary::new(4, 2, None, StreakType::Overall);
        assert_eq!(summary.longest_streak(), 4);
    }
}
