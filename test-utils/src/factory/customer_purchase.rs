//! Customer purchase factory.
//!
//! Purchases are stored with a single sold product and a single cash payment
//! unless the test overrides the totals.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

pub struct CustomerPurchaseFactory<'a> {
    db: &'a DatabaseConnection,
    folio: String,
    total: f64,
    user_id: String,
    station_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> CustomerPurchaseFactory<'a> {
    /// Creates a factory for a purchase recorded by `user_id` with no station.
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        let n = next_id();
        Self {
            db,
            folio: format!("F-{:06}", n),
            total: 116.0,
            user_id: user_id.into(),
            station_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn folio(mut self, folio: impl Into<String>) -> Self {
        self.folio = folio.into();
        self
    }

    pub fn total(mut self, total: f64) -> Self {
        self.total = total;
        self
    }

    pub fn station_id(mut self, station_id: impl Into<String>) -> Self {
        self.station_id = Some(station_id.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::customer_purchase::Model, DbErr> {
        let subtotal = (self.total / 1.16 * 100.0).round() / 100.0;
        entity::customer_purchase::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            folio: ActiveValue::Set(self.folio),
            iva: ActiveValue::Set(self.total - subtotal),
            subtotal: ActiveValue::Set(subtotal),
            total: ActiveValue::Set(self.total),
            total_letters: ActiveValue::Set("CIENTO DIECISEIS PESOS 00/100 M.N.".to_string()),
            user_id: ActiveValue::Set(self.user_id),
            station_id: ActiveValue::Set(self.station_id),
            products: ActiveValue::Set(json!([{
                "name": "Magna",
                "description": "Regular gasoline",
                "quantity": 1,
                "priceUnit": subtotal,
                "price": subtotal,
                "measurementUnit": "Litro",
                "measurementUnitSat": "LTR",
                "taxes": [{ "percentage": 16.0, "name": "IVA" }]
            }])),
            payments: ActiveValue::Set(json!([{
                "quantity": self.total,
                "key": "01",
                "description": "Efectivo"
            }])),
            client: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}
