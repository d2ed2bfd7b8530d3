//! Post-write bookkeeping shared by every entity service: keep the cache
//! coherent and publish the change event.

use serde::Serialize;

use crate::server::{
    event::bus::EventBus, model::event::CollectionChangeEvent, service::cache::EntityCache,
};

pub struct ChangeNotifier<'a> {
    cache: &'a EntityCache,
    events: &'a EventBus,
    collection: &'static str,
}

impl<'a> ChangeNotifier<'a> {
    pub fn new(cache: &'a EntityCache, events: &'a EventBus, collection: &'static str) -> Self {
        Self {
            cache,
            events,
            collection,
        }
    }

    pub fn created<T: Serialize>(&self, id: &str, station_id: Option<String>, dto: &T) {
        if let Some(model) = self.render(id, dto) {
            self.events.publish(CollectionChangeEvent::created(
                self.collection,
                id,
                station_id,
                model,
            ));
        }
    }

    pub async fn updated<T: Serialize>(&self, id: &str, station_id: Option<String>, dto: &T) {
        self.cache.invalidate(self.collection, id).await;

        if let Some(model) = self.render(id, dto) {
            self.events.publish(CollectionChangeEvent::updated(
                self.collection,
                id,
                station_id,
                model,
            ));
        }
    }

    pub async fn deleted(&self, id: &str, station_id: Option<String>) {
        self.cache.invalidate(self.collection, id).await;
        self.events
            .publish(CollectionChangeEvent::deleted(self.collection, id, station_id));
    }

    fn render<T: Serialize>(&self, id: &str, dto: &T) -> Option<serde_json::Value> {
        match serde_json::to_value(dto) {
            Ok(model) => Some(model),
            Err(e) => {
                tracing::warn!(
                    "Dropping change event for {}/{}: {}",
                    self.collection,
                    id,
                    e
                );
                None
            }
        }
    }
}
