pub mod i18n;
mod streak_text;

pub use i18n::{t, t_with, Locale};
pub use streak_text::{format_streak_display, record_message, status_message};
