//! HTTP request handlers.
//!
//! Each handler authenticates the caller through `AuthGuard`, converts path
//! and query input, delegates to a service and wraps the result in the
//! `{status, data, paginator?}` envelope.

pub mod auth;
pub mod customer_purchase;
pub mod payment_method;
pub mod product;
pub mod station;
pub mod user;

#[cfg(test)]
mod test;
