//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, Role, UpdateUserDto, UserDto},
    server::error::internal::InternalError,
};

/// Application user. The password hash stays in the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    /// Station the user works at. Only super admins may have none.
    pub station_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: self.role,
            station_id: self.station_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(InternalError::UnknownRole)` - The stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, InternalError> {
        let role = entity
            .role
            .parse::<Role>()
            .map_err(|_| InternalError::UnknownRole {
                user_id: entity.id.clone(),
                value: entity.role.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            role,
            station_id: entity.station_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for creating a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub station_id: Option<String>,
}

impl CreateUserParam {
    pub fn from_dto(dto: CreateUserDto, password_hash: String) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email.trim().to_lowercase(),
            password_hash,
            role: dto.role,
            station_id: dto.station_id,
        }
    }
}

/// Partial user update; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
    pub station_id: Option<String>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto, password_hash: Option<String>) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email.map(|email| email.trim().to_lowercase()),
            password_hash,
            role: dto.role,
            station_id: dto.station_id,
        }
    }
}
