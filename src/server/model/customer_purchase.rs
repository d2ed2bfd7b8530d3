//! Customer purchase domain models.
//!
//! Sold products, payments and client details are stored as JSON columns and
//! decoded here. A purchase that fails to decode is treated as corrupt data.

use chrono::{DateTime, Utc};

use crate::{
    model::customer_purchase::{
        ClientDto, CreateCustomerPurchaseDto, CustomerPurchaseDto, PaymentDto, ProductSoldDto,
    },
    server::error::internal::InternalError,
};

const COLLECTION: &str = "customer_purchases";

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerPurchase {
    pub id: String,
    pub folio: String,
    pub iva: f64,
    pub subtotal: f64,
    pub total: f64,
    /// Total spelled out in words, as printed on the ticket.
    pub total_letters: String,
    pub user_id: String,
    pub station_id: Option<String>,
    pub products: Vec<ProductSoldDto>,
    pub payments: Vec<PaymentDto>,
    pub client: Option<ClientDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CustomerPurchase {
    pub fn into_dto(self) -> CustomerPurchaseDto {
        CustomerPurchaseDto {
            id: self.id,
            folio: self.folio,
            iva: self.iva,
            subtotal: self.subtotal,
            total: self.total,
            total_letters: self.total_letters,
            user_id: self.user_id,
            station_id: self.station_id,
            products: self.products,
            payments: self.payments,
            client: self.client,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model, decoding its JSON columns.
    ///
    /// # Returns
    /// - `Err(InternalError::CorruptColumn)` - A JSON column does not match its nested model
    pub fn from_entity(entity: entity::customer_purchase::Model) -> Result<Self, InternalError> {
        let corrupt = |column: &'static str, id: &str| {
            let id = id.to_string();
            move |source| InternalError::CorruptColumn {
                collection: COLLECTION,
                column,
                id,
                source,
            }
        };

        let products = serde_json::from_value(entity.products)
            .map_err(corrupt("products", &entity.id))?;
        let payments = serde_json::from_value(entity.payments)
            .map_err(corrupt("payments", &entity.id))?;
        let client = entity
            .client
            .map(serde_json::from_value)
            .transpose()
            .map_err(corrupt("client", &entity.id))?;

        Ok(Self {
            id: entity.id,
            folio: entity.folio,
            iva: entity.iva,
            subtotal: entity.subtotal,
            total: entity.total,
            total_letters: entity.total_letters,
            user_id: entity.user_id,
            station_id: entity.station_id,
            products,
            payments,
            client,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Purchase to record, stamped with the recording user's identity.
#[derive(Debug, Clone)]
pub struct CreateCustomerPurchaseParam {
    pub folio: String,
    pub iva: f64,
    pub subtotal: f64,
    pub total: f64,
    pub total_letters: String,
    pub user_id: String,
    pub station_id: Option<String>,
    pub products: Vec<ProductSoldDto>,
    pub payments: Vec<PaymentDto>,
    pub client: Option<ClientDto>,
}

impl CreateCustomerPurchaseParam {
    pub fn from_dto(
        dto: CreateCustomerPurchaseDto,
        user_id: String,
        station_id: Option<String>,
    ) -> Self {
        Self {
            folio: dto.folio,
            iva: dto.iva,
            subtotal: dto.subtotal,
            total: dto.total,
            total_letters: dto.total_letters,
            user_id,
            station_id,
            products: dto.products,
            payments: dto.payments,
            client: dto.client,
        }
    }
}
