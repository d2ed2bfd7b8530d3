//! Station factory for creating test station entities.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stations with customizable fields.
///
/// Defaults:
/// - name: `"Station {n}"`
/// - email: `"station{n}@example.com"`
/// - station_key: `"ST-{n}"`
/// - active: `true`
pub struct StationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    station_key: String,
    active: bool,
    state: String,
    municipality: String,
    created_at: DateTime<Utc>,
}

impl<'a> StationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            name: format!("Station {}", n),
            email: format!("station{}@example.com", n),
            station_key: format!("ST-{}", n),
            active: true,
            state: "Jalisco".to_string(),
            municipality: "Guadalajara".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn station_key(mut self, station_key: impl Into<String>) -> Self {
        self.station_key = station_key.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Inserts the station and returns the stored model.
    pub async fn build(self) -> Result<entity::station::Model, DbErr> {
        entity::station::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            station_key: ActiveValue::Set(self.station_key),
            active: ActiveValue::Set(self.active),
            street: ActiveValue::Set(None),
            outside: ActiveValue::Set(None),
            zip_code: ActiveValue::Set(None),
            state: ActiveValue::Set(self.state),
            municipality: ActiveValue::Set(self.municipality),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a station with default values.
pub async fn create_station(db: &DatabaseConnection) -> Result<entity::station::Model, DbErr> {
    StationFactory::new(db).build().await
}
