mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::AppError;
use crate::service::{
    analytics::AnalyticsClient, engine::ScoringEngine, exclusion::ExclusionPolicy,
    processor::EventProcessor,
};

/// How long queued analytics records may take to flush on shutdown.
const ANALYTICS_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client();
    let (analytics, analytics_worker) = AnalyticsClient::new(
        http_client,
        &config.posthog_host,
        config.posthog_api_key.clone(),
    )?;
    let analytics_task = tokio::spawn(analytics_worker.run());

    let engine = Arc::new(ScoringEngine::new(ExclusionPolicy::new(
        config.excluded_role_ids.clone(),
        config.excluded_user_ids.clone(),
    )));
    let processor = Arc::new(EventProcessor::new(
        engine.clone(),
        analytics,
        config.guild_scope,
        config.announcements_channel.clone(),
    ));

    let mut client = bot::start::init_bot(&config, processor).await?;

    let mut scheduler = match config.leaderboard {
        Some(leaderboard) => {
            startup::start_leaderboard(client.http.clone(), engine, leaderboard).await
        }
        None => {
            tracing::info!("LEADERBOARD_CHANNEL_ID not set, leaderboard disabled");
            None
        }
    };

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        startup::shutdown_signal().await;
        shard_manager.shutdown_all().await;
    });

    if let Err(e) = bot::start::start_bot(&mut client).await {
        tracing::error!("Discord bot error: {}", e);
    }

    if let Some(scheduler) = scheduler.as_mut() {
        if let Err(e) = scheduler.shutdown().await {
            tracing::error!("Failed to shut down leaderboard scheduler: {}", e);
        }
    }

    // Drops the last analytics sender so the worker can drain
    drop(client);
    if tokio::time::timeout(ANALYTICS_DRAIN_TIMEOUT, analytics_task)
        .await
        .is_err()
    {
        tracing::warn!("Analytics queue not drained before shutdown timeout");
    }

    tracing::info!("Shutdown complete");

    Ok(())
}
