use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::config::EngagementConfig;
use crate::application::event_handlers::StreakAnnouncementHandler;
use crate::application::queries::StreakQueries;
use learnstreak_domain::activity::ActivityStore;
use learnstreak_domain::events::EventBus;

/// Command handlers container
pub struct CommandHandlers {
    pub record_activity: Arc<RecordActivityCommandHandler>,
}

pub struct Runtime {
    pub config: Arc<EngagementConfig>,
    pub event_bus: Arc<dyn EventBus>,
    pub announcements: StreakAnnouncementHandler,
}

pub struct Repositories {
    pub activity: Arc<dyn ActivityStore>,
}

pub struct Queries {
    pub streak: Arc<StreakQueries>,
}

pub struct AppState {
    pub runtime: Runtime,
    pub repositories: Repositories,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}
