//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for tests of domain conversions
//! (`from_entity`) and DTO serialization. Unlike factories, fixtures do NOT insert
//! data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let kill = fixture::killmail::entity();
//! let partial = fixture::killmail::entity_builder().without_details().build();
//! ```

pub mod killmail;
pub mod system;

pub use killmail::{entity as killmail_entity, entity_builder as killmail_entity_builder};
pub use system::{entity as system_entity, entity_builder as system_entity_builder};
