use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    pub id: String,
    pub name: String,
    pub email: String,
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

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateStationDto {
    pub name: String,
    pub email: String,
    pub station_key: String,
    #[serde(default = "default_active")]
    pub active: bool,
    pub street: Option<String>,
    pub outside: Option<String>,
    pub zip_code: Option<String>,
    pub state: String,
    pub municipality: String,
}

fn default_active() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStationDto {
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
