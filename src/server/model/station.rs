//! Station domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::station::{CreateStationDto, StationDto, UpdateStationDto};

/// A fuel station, the tenant boundary for users and purchases.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Externally assigned station number, unique across tenants.
    pub station_key: String,
    pub active: bool,
    pub street: Option<String>,
    pub outside: Option<String>,
    pub zip_code: Option<String>,
    pub state: String,
    pub municipality: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Station {
    pub fn into_dto(self) -> StationDto {
        StationDto {
            id: self.id,
            name: self.name,
            email: self.email,
            station_key: self.station_key,
            active: self.active,
            street: self.street,
            outside: self.outside,
            zip_code: self.zip_code,
            state: self.state,
            municipality: self.municipality,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::station::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            station_key: entity.station_key,
            active: entity.active,
            street: entity.street,
            outside: entity.outside,
            zip_code: entity.zip_code,
            state: entity.state,
            municipality: entity.municipality,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStationParam {
    pub name: String,
    pub email: String,
    pub station_key: String,
    pub active: bool,
    pub street: Option<String>,
    pub outside: Option<String>,
    pub zip_code: Option<String>,
    pub state: String,
    pub municipality: String,
}

impl CreateStationParam {
    pub fn from_dto(dto: CreateStationDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            station_key: dto.station_key,
            active: dto.active,
            street: dto.street,
            outside: dto.outside,
            zip_code: dto.zip_code,
            state: dto.state,
            municipality: dto.municipality,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStationParam {
    pub name: Option<String>,
    pub email: Option<String>,
    pub station_key: Option<String>,
    pub active: Option<bool>,
    pub street: Option<String>,
    pub outside: Option<String>,
    pub zip_code: Option<String>,
    pub state: Option<String>,
    pub municipality: Option<String>,
}

impl UpdateStationParam {
    pub fn from_dto(dto: UpdateStationDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            station_key: dto.station_key,
            active: dto.active,
            street: dto.street,
            outside: dto.outside,
            zip_code: dto.zip_code,
            state: dto.state,
            municipality: dto.municipality,
        }
    }
}
