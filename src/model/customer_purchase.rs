use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxDto {
    pub percentage: f64,
    pub name: String,
}

/// One line of a ticket.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSoldDto {
    pub name: String,
    pub description: String,
    pub quantity: f64,
    pub price_unit: f64,
    pub price: f64,
    pub measurement_unit: String,
    pub measurement_unit_sat: String,
    #[serde(default)]
    pub taxes: Vec<TaxDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub quantity: f64,
    pub key: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPurchaseDto {
    pub id: String,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Purchase recorded from a point-of-sale ticket. The recording user and
/// their station come from the caller's session.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerPurchaseDto {
    pub folio: String,
    pub iva: f64,
    pub subtotal: f64,
    pub total: f64,
    pub total_letters: String,
    pub products: Vec<ProductSoldDto>,
    pub payments: Vec<PaymentDto>,
    pub client: Option<ClientDto>,
}
