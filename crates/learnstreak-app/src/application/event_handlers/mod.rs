mod streak_announcement_handler;

pub use streak_announcement_handler::StreakAnnouncementHandler;
