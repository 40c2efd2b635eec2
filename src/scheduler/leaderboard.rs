use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;
use crate::service::leaderboard::LeaderboardPublisher;

/// Refresh every five minutes, on the minute.
const REFRESH_SCHEDULE: &str = "0 */5 * * * *";

/// Starts the leaderboard refresh scheduler
///
/// Refreshes the leaderboard once immediately, then on every tick of the schedule. A
/// failed refresh is logged and retried on the next tick.
///
/// # Arguments
/// - `publisher` - Publisher whose message has already been set up
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler, to be shut down on exit
/// - `Err(AppError::SchedulerErr)` - The job could not be created or started
pub async fn start_scheduler(publisher: Arc<LeaderboardPublisher>) -> Result<JobScheduler, AppError> {
    if let Err(e) = publisher.refresh().await {
        tracing::error!("Initial leaderboard refresh failed: {}", e);
    }

    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(REFRESH_SCHEDULE, move |_uuid, _lock| {
        let publisher = publisher.clone();

        Box::pin(async move {
            if let Err(e) = publisher.refresh().await {
                tracing::error!("Error refreshing leaderboard: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Leaderboard scheduler started");

    Ok(scheduler)
}
