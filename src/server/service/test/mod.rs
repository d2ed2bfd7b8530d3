use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::{
    model::user::Role,
    server::{
        event::bus::{EventBus, EventHandler},
        model::{auth::AuthSession, event::CollectionChangeEvent},
        service::cache::EntityCache,
    },
};

mod customer_purchase;

/// Forwards published events into a channel the test can drain.
struct Forward(mpsc::UnboundedSender<CollectionChangeEvent>);

#[async_trait]
impl EventHandler for Forward {
    async fn handle(&self, event: CollectionChangeEvent) {
        let _ = self.0.send(event);
    }
}

fn listen(events: &EventBus) -> mpsc::UnboundedReceiver<CollectionChangeEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    events.subscribe("test", Forward(tx)).unwrap();
    rx
}

async fn next_event(
    rx: &mut mpsc::UnboundedReceiver<CollectionChangeEvent>,
) -> CollectionChangeEvent {
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("no event within a second")
        .expect("event channel closed")
}

fn cache() -> EntityCache {
    EntityCache::new(Duration::from_secs(600))
}

fn session(user_id: &str, role: Role, station_id: Option<&str>) -> AuthSession {
    AuthSession {
        user_id: user_id.to_string(),
        email: "caller@example.com".to_string(),
        role,
        station_id: station_id.map(str::to_string),
        token: "token".to_string(),
    }
}
