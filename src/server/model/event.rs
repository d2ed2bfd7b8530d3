//! In-process change notifications emitted after every write.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeKind {
    Create,
    Update,
    Delete,
}

/// A create, update or delete of one record.
///
/// `model` holds the record as serialized for clients; it is `None` for deletes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionChangeEvent {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub collection: String,
    pub id: String,
    pub station_id: Option<String>,
    pub model: Option<Value>,
}

impl CollectionChangeEvent {
    pub fn created(
        collection: &str,
        id: impl Into<String>,
        station_id: Option<String>,
        model: Value,
    ) -> Self {
        Self {
            kind: ChangeKind::Create,
            collection: collection.to_string(),
            id: id.into(),
            station_id,
            model: Some(model),
        }
    }

    pub fn updated(
        collection: &str,
        id: impl Into<String>,
        station_id: Option<String>,
        model: Value,
    ) -> Self {
        Self {
            kind: ChangeKind::Update,
            collection: collection.to_string(),
            id: id.into(),
            station_id,
            model: Some(model),
        }
    }

    pub fn deleted(collection: &str, id: impl Into<String>, station_id: Option<String>) -> Self {
        Self {
            kind: ChangeKind::Delete,
            collection: collection.to_string(),
            id: id.into(),
            station_id,
            model: None,
        }
    }
}
