//! Service layer for lookups and kill aggregation.
//!
//! This module sits between the controller (API) layer and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Validation**: Rejecting unsupported time-window modes before any query runs
//! - **Orchestration**: Combining repository calls, e.g. a scope name with its buckets
//! - **Derived values**: Totals that must equal the sum of the buckets returned with them

pub mod constellation;
pub mod kill;
pub mod planet;
pub mod region;
pub mod report;
pub mod stargate;
pub mod station;
pub mod system;
