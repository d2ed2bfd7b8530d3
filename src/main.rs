mod model;
mod server;

use chrono::Duration as TokenDuration;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    event::bus::EventBus,
    scheduler::token_pruning,
    service::{auth::token::TokenSigner, cache::EntityCache},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_super_admin(&db, config.seed_admin.as_ref()).await?;

    let signer = TokenSigner::new(
        config.jwt_secret.as_bytes(),
        TokenDuration::hours(config.token_ttl_hours),
    );
    let cache = EntityCache::new(Duration::from_secs(config.cache_ttl_seconds));
    let events = EventBus::new();

    let http_client = startup::setup_reqwest_client()?;
    let _realtime = startup::start_realtime_sync(&events, &config, http_client);

    let _scheduler =
        token_pruning::start_scheduler(db.clone(), signer.clone(), cache.clone()).await?;

    let app = startup::build_app(AppState::new(db, signer, cache, events));

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
