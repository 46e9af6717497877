use learnstreak_domain::streak::StreakSummary;

use super::i18n::{t, t_with, Locale};

/// Streak length rendered as a short label ("No streak", "1 day", "12 days")
pub fn format_streak_display(streak: u32, locale: Locale) -> String {
    match streak {
        0 => t(locale, "streak.display.none"),
        1 => t(locale, "streak.display.one"),
        n => t_with(locale, "streak.display.many", &[("days", &n.to_string())]),
    }
}

/// Encouragement line shown next to a streak
pub fn status_message(summary: &StreakSummary, locale: Locale) -> String {
    if !summary.is_active() {
        return t(locale, "streak.status.inactive");
    }

    let days = summary.current_streak().to_string();
    match summary.current_streak() {
        1 => t(locale, "streak.status.started"),
        n if n >= 7 => t_with(locale, "streak.status.amazing", &[("days", &days)]),
        _ => t_with(locale, "streak.status.keepUp", &[("days", &days)]),
    }
}

/// Confirmation returned after an activity is recorded
pub fn record_message(current_streak: u32, locale: Locale) -> String {
    if current_streak > 0 {
        t_with(
            locale,
            "streak.record.onStreak",
            &[("days", &current_streak.to_string())],
        )
    } else {
        t(locale, "streak.record.start")
    }
}
