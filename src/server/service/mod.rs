//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They apply
//! business rules such as station scoping and user-creation limits, serve
//! single-record reads through the entity cache, and publish a change event
//! after every successful write.

pub mod auth;
pub mod cache;
pub mod change;
pub mod customer_purchase;
pub mod payment_method;
pub mod product;
pub mod scope;
pub mod station;
pub mod user;

#[cfg(test)]
mod test;
