//! Mirrors change events into a Firebase-style realtime database.
//!
//! Each mirrored record lives at
//! `{base}/events/cloud-api/{collection}/{id}.json`. Creates and updates
//! `PUT` the serialized record there, deletes `DELETE` the path. Only users
//! and products are mirrored; events for other collections are ignored.

use async_trait::async_trait;
use url::Url;

use crate::server::{
    error::AppError,
    event::bus::EventHandler,
    model::event::{ChangeKind, CollectionChangeEvent},
};

/// Subscriber name on the event bus.
pub const REALTIME_SUBSCRIBER: &str = "realtime-sync";

const EVENTS_PATH: &str = "events/cloud-api";
const MIRRORED_COLLECTIONS: &[&str] = &["users", "products"];

#[derive(Clone)]
pub struct RealtimeSync {
    client: reqwest::Client,
    base_url: Url,
    auth: Option<String>,
}

impl RealtimeSync {
    /// Creates a sync client. `base_url` must end with `/` so relative paths
    /// join beneath it rather than replacing its last segment.
    pub fn new(client: reqwest::Client, base_url: Url, auth: Option<String>) -> Self {
        Self {
            client,
            base_url,
            auth,
        }
    }

    /// Builds the document URL for one record, with the `auth` query
    /// parameter when a database secret is configured.
    pub fn record_url(&self, collection: &str, id: &str) -> Result<Url, AppError> {
        let mut url = self
            .base_url
            .join(&format!("{}/{}/{}.json", EVENTS_PATH, collection, id))
            .map_err(|e| AppError::InternalError(format!("Invalid realtime URL: {}", e)))?;

        if let Some(auth) = &self.auth {
            url.query_pairs_mut().append_pair("auth", auth);
        }

        Ok(url)
    }

    /// Applies one event to the realtime database.
    ///
    /// # Returns
    /// - `Ok(true)` - The remote record was written or removed
    /// - `Ok(false)` - The collection is not mirrored, or a write carried no model
    /// - `Err(AppError)` - The request failed or returned a non-success status
    pub async fn apply(&self, event: &CollectionChangeEvent) -> Result<bool, AppError> {
        if !MIRRORED_COLLECTIONS.contains(&event.collection.as_str()) {
            return Ok(false);
        }

        let url = self.record_url(&event.collection, &event.id)?;
        let request = match (event.kind, &event.model) {
            (ChangeKind::Create | ChangeKind::Update, Some(model)) => {
                self.client.put(url).json(model)
            }
            (ChangeKind::Create | ChangeKind::Update, None) => return Ok(false),
            (ChangeKind::Delete, _) => self.client.delete(url),
        };

        request.send().await?.error_for_status()?;

        Ok(true)
    }
}

#[async_trait]
impl EventHandler for RealtimeSync {
    async fn handle(&self, event: CollectionChangeEvent) {
        match self.apply(&event).await {
            Ok(true) => tracing::debug!(
                "Mirrored {:?} of {}/{} to realtime database",
                event.kind,
                event.collection,
                event.id
            ),
            Ok(false) => {}
            Err(e) => tracing::warn!(
                "Failed to mirror {:?} of {}/{}: {}",
                event.kind,
                event.collection,
                event.id,
                e
            ),
        }
    }
}
