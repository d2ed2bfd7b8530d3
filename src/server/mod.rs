//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for persistence.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and envelopes
//! - **Service Layer** (`service/`) - Business rules, caching and change notification
//! - **Data Layer** (`data/`) - Repositories and entity-to-domain conversion
//! - **Query Layer** (`query/`) - Filter compilation, sorting, paging and relation population
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication guard
//! - **Events** (`event/`) - In-process change bus and the realtime mirror
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, signer, cache, event bus)
//! - **Startup** (`startup`) - Database, seeding, realtime mirror and HTTP layers
//! - **Router** (`router`) - Axum route table under `/api/v1`
//! - **Scheduler** (`scheduler/`) - Cron job pruning stale sessions
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Controller** authenticates the caller and parses path and query input
//! 3. **Service** applies business rules and consults the cache
//! 4. **Data** runs compiled queries through the query executor
//! 5. **Service** publishes a change event after writes
//! 6. **Controller** wraps the DTO in the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod event;
pub mod middleware;
pub mod model;
pub mod query;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
