//! Product factory for creating test product entities.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products.
///
/// Defaults to `"Product {n}"` priced at 10.0 with a public price of 11.6.
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    price: f64,
    price_public: f64,
    created_at: DateTime<Utc>,
}

impl<'a> ProductFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            name: format!("Product {}", n),
            description: "Test product".to_string(),
            price: 10.0,
            price_public: 11.6,
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn price_public(mut self, price_public: f64) -> Self {
        self.price_public = price_public;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            price_public: ActiveValue::Set(self.price_public),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}
