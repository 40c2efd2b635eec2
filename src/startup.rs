use std::sync::Arc;

use serenity::http::Http;
use tokio_cron_scheduler::JobScheduler;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LeaderboardConfig;
use crate::scheduler::leaderboard;
use crate::service::{engine::ScoringEngine, leaderboard::LeaderboardPublisher};

const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Builds the HTTP client used for analytics capture.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .unwrap_or_default()
}

/// Sets up the leaderboard message and starts its refresh job.
///
/// Leaderboard failures never stop the bot: on error the leaderboard is simply disabled
/// for this run.
///
/// # Returns
/// - `Some(JobScheduler)` - Refresh job running
/// - `None` - Setup or scheduling failed
pub async fn start_leaderboard(
    http: Arc<Http>,
    engine: Arc<ScoringEngine>,
    config: LeaderboardConfig,
) -> Option<JobScheduler> {
    let publisher = Arc::new(LeaderboardPublisher::new(http, engine, config));

    if let Err(e) = publisher.setup().await {
        tracing::error!("Failed to set up leaderboard message: {}", e);
        return None;
    }

    match leaderboard::start_scheduler(publisher).await {
        Ok(scheduler) => Some(scheduler),
        Err(e) => {
            tracing::error!("Failed to start leaderboard scheduler: {}", e);
            None
        }
    }
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
