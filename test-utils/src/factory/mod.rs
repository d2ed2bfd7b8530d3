//! Factories for inserting test entities.
//!
//! Each factory fills every column with a unique, valid default so tests only
//! set the fields they assert on. Factories insert through SeaORM active
//! models and return the stored entity model.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let station = factory::station::create_station(db).await?;
//! let admin = factory::user::UserFactory::new(db)
//!     .role("StationAdmin")
//!     .station_id(&station.id)
//!     .build()
//!     .await?;
//! ```

pub mod access_token;
pub mod customer_purchase;
pub mod helpers;
pub mod payment_method;
pub mod product;
pub mod station;
pub mod user;
