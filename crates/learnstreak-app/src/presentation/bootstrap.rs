use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::commands::handlers::*;
use crate::application::config::EngagementConfig;
use crate::application::event_handlers::StreakAnnouncementHandler;
use crate::application::queries::StreakQueries;
use crate::presentation::state::{AppState, CommandHandlers, Queries, Repositories, Runtime};
use learnstreak_domain::activity::ActivityStore;
use learnstreak_domain::events::streak_events::{MilestoneUnlocked, StreakReset};
use learnstreak_domain::events::{EventBus, TypedEventHandlerWrapper};
use learnstreak_infrastructure::events::InMemoryEventBus;
use learnstreak_infrastructure::persistence::InMemoryActivityStore;

/// Wire the application with an in-memory activity store
pub async fn build_app_state(config: EngagementConfig) -> anyhow::Result<AppState> {
    let activity_store = Arc::new(InMemoryActivityStore::new()) as Arc<dyn ActivityStore>;
    build_app_state_with_store(config, activity_store).await
}

/// Wire the application around a caller-supplied activity store
pub async fn build_app_state_with_store(
    config: EngagementConfig,
    activity_store: Arc<dyn ActivityStore>,
) -> anyhow::Result<AppState> {
    let startup_started_at = Instant::now();

    info!(
        locale = %config.locale,
        utc_offset_minutes = config.utc_offset_minutes,
        "Building application state"
    );
    let config = Arc::new(config);

    info!("📡 Initializing event bus...");
    let started_at = Instant::now();
    let event_bus = Arc::new(InMemoryEventBus::new());
    let announcements = StreakAnnouncementHandler::new(config.locale);

    event_bus
        .subscribe::<MilestoneUnlocked>(Arc::new(TypedEventHandlerWrapper::<
            MilestoneUnlocked,
            _,
        >::new(announcements.clone())))
        .await?;
    event_bus
        .subscribe::<StreakReset>(Arc::new(TypedEventHandlerWrapper::<StreakReset, _>::new(
            announcements.clone(),
        )))
        .await?;
    info!(
        "✓ Event bus initialized and handlers registered ({}ms)",
        started_at.elapsed().as_millis()
    );

    let event_bus = event_bus as Arc<dyn EventBus>;

    let started_at = Instant::now();
    let queries = Queries {
        streak: Arc::new(StreakQueries::new(activity_store.clone(), config.clone())),
    };
    let command_handlers = CommandHandlers {
        record_activity: Arc::new(RecordActivityCommandHandler::new(
            activity_store.clone(),
            event_bus.clone(),
            config.clone(),
        )),
    };
    info!(
        "✓ Queries and command handlers initialized ({}ms)",
        started_at.elapsed().as_millis()
    );

    info!(
        "✓ Application state ready ({}ms)",
        startup_started_at.elapsed().as_millis()
    );

    Ok(AppState {
        runtime: Runtime {
            config,
            event_bus,
            announcements,
        },
        repositories: Repositories {
            activity: activity_store,
        },
        queries,
        command_handlers,
    })
}
