use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodDto {
    pub id: String,
    pub key: String,
    pub name: String,
    pub description: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentMethodDto {
    pub key: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentMethodDto {
    pub key: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<bool>,
}
