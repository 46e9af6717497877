mod engagement;

pub use engagement::{
    EngagementConfig, LogLevel, ENV_LOCALE, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_UTC_OFFSET_MINUTES,
};
