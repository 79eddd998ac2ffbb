//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! universe entities and kill aggregates. Domain models are converted from entity models
//! or raw query rows at the repository boundary and transformed to DTOs at the controller
//! boundary.

pub mod constellation;
pub mod kill;
pub mod mode;
pub mod planet;
pub mod region;
pub mod report;
pub mod stargate;
pub mod station;
pub mod system;
