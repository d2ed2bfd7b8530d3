//! Data transfer objects exchanged with API clients.
//!
//! Every DTO serializes with camelCase keys. Request DTOs are the only place
//! client input enters the server; response DTOs never carry password hashes.

pub mod api;
pub mod auth;
pub mod customer_purchase;
pub mod payment_method;
pub mod product;
pub mod station;
pub mod user;
