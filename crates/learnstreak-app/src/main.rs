use anyhow::Context;
use chrono::{Duration, Utc};
use std::path::PathBuf;
use tracing::info;

use learnstreak_domain::activity::{ActivityRecord, ActivityStore};
use learnstreak_domain::shared::UserId;
use learnstreak_domain::streak::{bonus_points, ActivityType, StreakType};
use learnstreak_infrastructure::logging::init_logger;
use learnstreak_lib::application::commands::{CommandHandler, RecordActivityCommand};
use learnstreak_lib::application::config::EngagementConfig;
use learnstreak_lib::AppState;

const DEMO_USER: &str = "demo-user";
const CONFIG_PATH_ENV: &str = "LEARNSTREAK_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => EngagementConfig::load(&PathBuf::from(path))?,
        Err(_) => EngagementConfig::from_env(),
    };

    init_logger(config.log_dir.clone(), config.log_level.as_str())
        .context("Failed to initialize logger")?;
    info!("🚀 streak-demo starting");

    let state = learnstreak_lib::build_app_state(config).await?;
    seed_demo_history(&state).await?;

    let result = state
        .command_handlers
        .record_activity
        .handle(RecordActivityCommand::new(DEMO_USER, ActivityType::Tutorial))
        .await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    let streak = state
        .queries
        .streak
        .get_streak(DEMO_USER, StreakType::Overall)
        .await?;
    println!("{}", serde_json::to_string_pretty(&streak)?);

    let leaderboard = state
        .queries
        .streak
        .get_all_streaks(StreakType::Overall)
        .await?;
    println!("{}", serde_json::to_string_pretty(&leaderboard)?);

    info!("✓ streak-demo finished");
    Ok(())
}

/// Six consecutive days ending yesterday for the demo user, plus a lapsed rival
async fn seed_demo_history(state: &AppState) -> anyhow::Result<()> {
    let now = Utc::now();
    let store = &state.repositories.activity;

    for days_ago in (1..=6).rev() {
        let activity_type = if days_ago % 2 == 0 {
            ActivityType::Chat
        } else {
            ActivityType::Tutorial
        };
        // Bonus as it would have been awarded on that day
        let streak_that_day = 7 - days_ago as u32;
        let record = ActivityRecord::new(
            UserId::from_string(DEMO_USER),
            activity_type,
            activity_type.default_points(),
            bonus_points(streak_that_day),
            now - Duration::days(days_ago),
        )?;
        store.append(&record).await?;
    }

    for days_ago in 10..=13 {
        let record = ActivityRecord::new(
            UserId::from_string("rival-user"),
            ActivityType::Tutorial,
            ActivityType::Tutorial.default_points(),
            0,
            now - Duration::days(days_ago),
        )?;
        store.append(&record).await?;
    }

    info!("Seeded demo history for {} and rival-user", DEMO_USER);
    Ok(())
}
