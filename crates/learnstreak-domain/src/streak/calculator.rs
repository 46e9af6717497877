use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use std::collections::HashSet;

use super::value_objects::{StreakSummary, StreakType};

/// Calendar date of a timestamp as seen in `offset`.
pub fn activity_date(timestamp: DateTime<Utc>, offset: &FixedOffset) -> NaiveDate {
    timestamp.with_timezone(offset).date_naive()
}

/// Number of distinct calendar days in `activity_dates`.
pub fn total_active_days(activity_dates: &[NaiveDate]) -> u32 {
    activity_dates.iter().collect::<HashSet<_>>().len() as u32
}

/// Streak summary relative to the current date in `offset`.
pub fn compute_streak(
    activity_dates: &[NaiveDate],
    streak_type: StreakType,
    offset: &FixedOffset,
) -> StreakSummary {
    compute_streak_on(activity_dates, streak_type, activity_date(Utc::now(), offset))
}

/// Streak summary for raw timestamps, bucketed into days in `offset`.
pub fn compute_streak_from_timestamps(
    timestamps: &[DateTime<Utc>],
    streak_type: StreakType,
    today: NaiveDate,
    offset: &FixedOffset,
) -> StreakSummary {
    let dates: Vec<NaiveDate> = timestamps
        .iter()
        .map(|ts| activity_date(*ts, offset))
        .collect();
    compute_streak_on(&dates, streak_type, today)
}

/// Streak summary relative to an explicit `today`.
///
/// The current streak is the most recent unbroken run of days, and only
/// counts while its last day is today or yesterday. The longest streak covers
/// every run in the history, lapsed or not.
pub fn compute_streak_on(
    activity_dates: &[NaiveDate],
    streak_type: StreakType,
    today: NaiveDate,
) -> StreakSummary {
    let mut dates = activity_dates.to_vec();
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let Some(&last_activity) = dates.first() else {
        return StreakSummary::empty(streak_type);
    };

    let mut run = 1u32;
    let mut longest = 0u32;
    let mut most_recent_run: Option<u32> = None;

    for pair in dates.windows(2) {
        match (pair[0] - pair[1]).num_days() {
            0 => continue,
            1 => run += 1,
            _ => {
                most_recent_run.get_or_insert(run);
                longest = longest.max(run);
                run = 1;
            }
        }
    }
    longest = longest.max(run);
    let most_recent_run = most_recent_run.unwrap_or(run);

    // Future-dated activity (clock skew) is treated as today.
    let days_since_last = (today - last_activity).num_days().max(0);
    let current = if days_since_last <= 1 {
        most_recent_run
    } else {
        0
    };

    StreakSummary::new(current, longest, Some(last_activity), streak_type)
}
