//! Database repository layer for all domain entities.
//!
//! Each module holds the repository for one collection and its
//! [`Collection`](crate::server::query::collection::Collection) registration:
//! the filterable fields and populatable relations the list-query layer uses.
//! Repositories return domain models, never entity models.

pub mod access_token;
pub mod customer_purchase;
pub mod payment_method;
pub mod product;
pub mod station;
pub mod user;

#[cfg(test)]
mod test;
