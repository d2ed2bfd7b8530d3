//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names, emails and keys in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh UUID v4 string for use as an entity primary key.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates a station together with an admin user assigned to it.
///
/// # Returns
/// - `Ok((station, admin))` - The created station and its `StationAdmin`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_station_with_admin(
    db: &DatabaseConnection,
) -> Result<(entity::station::Model, entity::user::Model), DbErr> {
    let station = crate::factory::station::create_station(db).await?;
    let admin = crate::factory::user::UserFactory::new(db)
        .role("StationAdmin")
        .station_id(&station.id)
        .build()
        .await?;

    Ok((station, admin))
}
