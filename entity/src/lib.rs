//! SeaORM entities for the fuel-station backend.
//!
//! Every table keys its rows by a UUID v4 string and carries `created_at` /
//! `updated_at` timestamps. Nested purchase data (sold products, payments and
//! client info) is stored as JSON columns.

pub mod prelude;

pub mod access_token;
pub mod customer_purchase;
pub mod payment_method;
pub mod product;
pub mod station;
pub mod user;
