use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{auth::token::TokenSigner, auth::AuthService, cache::EntityCache},
};

/// Runs at the top of every hour.
const PRUNE_SCHEDULE: &str = "0 0 * * * *";

/// Starts the session pruning scheduler.
///
/// Each run deletes access tokens older than the token lifetime and drops
/// expired entries from the entity cache.
///
/// # Arguments
/// - `db` - Database connection
/// - `signer` - Token signer whose lifetime defines when a session is stale
/// - `cache` - Entity cache to purge
pub async fn start_scheduler(
    db: DatabaseConnection,
    signer: TokenSigner,
    cache: EntityCache,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(PRUNE_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let signer = signer.clone();
        let cache = cache.clone();

        Box::pin(async move {
            if let Err(e) = prune(&db, &signer, &cache).await {
                tracing::error!("Error pruning sessions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Session pruning scheduler started");

    Ok(scheduler)
}

/// One pruning pass.
pub async fn prune(
    db: &DatabaseConnection,
    signer: &TokenSigner,
    cache: &EntityCache,
) -> Result<(), AppError> {
    let sessions = AuthService::new(db, signer).prune_sessions().await?;
    let entries = cache.purge_expired().await;

    if sessions > 0 || entries > 0 {
        tracing::info!(
            "Pruned {} expired sessions and {} cache entries",
            sessions,
            entries
        );
    }

    Ok(())
}
