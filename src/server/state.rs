//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler
//! through Axum's state extraction. Every field is cheap to clone: the
//! database connection is a pool, and the signer, cache and event bus share
//! their internals behind `Arc`s.

use sea_orm::DatabaseConnection;

use crate::server::{
    event::bus::EventBus,
    service::{auth::token::TokenSigner, cache::EntityCache},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for all repositories.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub signer: TokenSigner,

    /// Id-keyed cache of single-record reads.
    pub cache: EntityCache,

    /// Fan-out of collection changes to in-process subscribers.
    pub events: EventBus,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        signer: TokenSigner,
        cache: EntityCache,
        events: EventBus,
    ) -> Self {
        Self {
            db,
            signer,
            cache,
            events,
        }
    }
}
