use axum::{
    http::{header, HeaderName, HeaderValue},
    Router,
};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::{
    model::user::Role,
    server::{
        config::{Config, SeedAdmin},
        data::user::UserRepository,
        error::AppError,
        event::{
            bus::{EventBus, SubscriptionToken},
            realtime::{RealtimeSync, REALTIME_SUBSCRIBER},
        },
        model::user::CreateUserParam,
        router,
        service::auth::password::hash_password,
        state::AppState,
    },
};

/// Connects to the database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to the database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the outbound HTTP client used by the realtime mirror.
///
/// Redirects are disabled so a misconfigured mirror URL cannot bounce
/// requests to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(10))
        .build()?;

    Ok(client)
}

/// Creates the first super admin when the users table is empty.
///
/// # Returns
/// - `Ok(true)` - A super admin was created
/// - `Ok(false)` - Users already exist or no seed credentials are configured
pub async fn seed_super_admin(
    db: &DatabaseConnection,
    seed: Option<&SeedAdmin>,
) -> Result<bool, AppError> {
    let repo = UserRepository::new(db);

    if repo.count_all().await? > 0 {
        return Ok(false);
    }

    let Some(seed) = seed else {
        tracing::warn!(
            "No users exist and SEED_ADMIN_EMAIL/SEED_ADMIN_PASSWORD are not set; \
             nobody will be able to log in"
        );
        return Ok(false);
    };

    let admin = repo
        .create(CreateUserParam {
            first_name: "Super".to_string(),
            last_name: "Admin".to_string(),
            email: seed.email.clone(),
            password_hash: hash_password(&seed.password)?,
            role: Role::SuperAdmin,
            station_id: None,
        })
        .await?;

    tracing::info!("Seeded super admin {}", admin.email);

    Ok(true)
}

/// Subscribes the realtime mirror to the event bus when it is configured.
pub fn start_realtime_sync(
    events: &EventBus,
    config: &Config,
    client: reqwest::Client,
) -> Option<SubscriptionToken> {
    let base_url = config.realtime_url.clone()?;

    tracing::info!("Mirroring collection changes to {}", base_url);

    events.subscribe(
        REALTIME_SUBSCRIBER,
        RealtimeSync::new(client, base_url, config.realtime_auth.clone()),
    )
}

/// Builds the routed application with its HTTP layers applied.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    security_headers(router::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn security_headers(router: Router<AppState>) -> Router<AppState> {
    let headers = [
        (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        (header::X_FRAME_OPTIONS, "DENY"),
        (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
        (header::X_XSS_PROTECTION, "1; mode=block"),
        (
            HeaderName::from_static("x-permitted-cross-domain-policies"),
            "none",
        ),
    ];

    headers.into_iter().fold(router, |router, (name, value)| {
        router.layer(SetResponseHeaderLayer::if_not_present(
            name,
            HeaderValue::from_static(value),
        ))
    })
}
