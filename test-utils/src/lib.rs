//! Astrocartics Test Utils
//!
//! Provides shared testing utilities for building unit and router tests for the astrocartics
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases populated with the universe and killmail schema.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Inserts universe and killmail rows with sensible defaults
//! - **fixture**: In-memory entity models that never touch the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn lists_regions() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_universe_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let region = factory::create_region(db).await?;
//!     // Perform repository or router calls...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
