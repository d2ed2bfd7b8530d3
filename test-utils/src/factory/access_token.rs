//! Access token (login session) factory.

use crate::factory::helpers::new_uuid;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for session rows tied to an existing user.
///
/// The `token` column defaults to a random string; tests that go through the
/// auth guard set it to a real signed token.
pub struct AccessTokenFactory<'a> {
    db: &'a DatabaseConnection,
    token: String,
    user: &'a entity::user::Model,
    created_at: DateTime<Utc>,
}

impl<'a> AccessTokenFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user: &'a entity::user::Model) -> Self {
        Self {
            db,
            token: new_uuid(),
            user,
            created_at: Utc::now(),
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::access_token::Model, DbErr> {
        entity::access_token::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            token: ActiveValue::Set(self.token),
            user_id: ActiveValue::Set(self.user.id.clone()),
            email: ActiveValue::Set(self.user.email.clone()),
            role: ActiveValue::Set(self.user.role.clone()),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}
