//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Parameter types carry
//! validated input from controllers down to the data layer.

pub mod auth;
pub mod customer_purchase;
pub mod event;
pub mod payment_method;
pub mod product;
pub mod station;
pub mod user;
