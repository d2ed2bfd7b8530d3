//! Fuel Station Test Utils
//!
//! Shared testing utilities for the fuel-station backend. The crate builds
//! in-memory SQLite databases with the tables a test needs and offers
//! factories that insert entities with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert entities into the test database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Station;
//!
//! #[tokio::test]
//! async fn lists_stations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Station)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
