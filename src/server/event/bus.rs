use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::{sync::broadcast, task::JoinHandle};

use crate::server::model::event::CollectionChangeEvent;

/// Events buffered per subscriber before the slowest one starts lagging.
const EVENT_BUFFER: usize = 256;

/// Receives every event published after it subscribed.
#[async_trait]
pub trait EventHandler: Send + Sync + 'static {
    async fn handle(&self, event: CollectionChangeEvent);
}

/// Handle for one subscription, used to unsubscribe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionToken {
    name: String,
}

/// Broadcast bus owned by application state.
///
/// Each subscriber gets its own receiver and task. A subscriber that falls
/// more than the buffer behind skips the missed events with a warning.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<CollectionChangeEvent>,
    subscribers: Arc<Mutex<HashMap<String, JoinHandle<()>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            sender,
            subscribers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Publishes an event to every current subscriber without waiting for them.
    pub fn publish(&self, event: CollectionChangeEvent) {
        if self.sender.send(event).is_err() {
            tracing::debug!("Change event published with no subscribers");
        }
    }

    /// Registers `handler` under a unique name.
    ///
    /// # Returns
    /// - `Some(SubscriptionToken)` - Handler is now receiving events
    /// - `None` - A subscriber with that name already exists; nothing changed
    pub fn subscribe<H: EventHandler>(&self, name: &str, handler: H) -> Option<SubscriptionToken> {
        let mut subscribers = self.lock();
        if subscribers.contains_key(name) {
            return None;
        }

        let mut receiver = self.sender.subscribe();
        let subscriber = name.to_string();
        let task = tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => handler.handle(event).await,
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        tracing::warn!("Subscriber {} skipped {} change events", subscriber, missed);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        subscribers.insert(name.to_string(), task);
        Some(SubscriptionToken {
            name: name.to_string(),
        })
    }

    /// Stops the subscription's task. Events already being handled are dropped.
    pub fn unsubscribe(&self, token: SubscriptionToken) -> bool {
        match self.lock().remove(&token.name) {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, JoinHandle<()>>> {
        // A panic while holding this lock cannot leave the map half-updated.
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
