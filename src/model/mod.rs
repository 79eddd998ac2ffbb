//! JSON response bodies.
//!
//! Every DTO serializes with lower snake case keys matching the column they were
//! read from, so clients see `region_id`, `system_name`, and so on.

pub mod api;
pub mod constellation;
pub mod kill;
pub mod planet;
pub mod region;
pub mod report;
pub mod stargate;
pub mod station;
pub mod system;
