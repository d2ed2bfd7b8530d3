//! Payment method factory.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PaymentMethodFactory<'a> {
    db: &'a DatabaseConnection,
    key: String,
    name: String,
    status: bool,
}

impl<'a> PaymentMethodFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            key: format!("{:02}", n % 100),
            name: format!("Payment {}", n),
            status: true,
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::payment_method::Model, DbErr> {
        let now = Utc::now();
        entity::payment_method::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            key: ActiveValue::Set(self.key),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("Test payment method".to_string()),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_payment_method(
    db: &DatabaseConnection,
) -> Result<entity::payment_method::Model, DbErr> {
    PaymentMethodFactory::new(db).build().await
}
