//! Database repository layer for the universe and killmail tables.
//!
//! This module contains repository structs that issue one read per query shape. Lookups
//! use SeaORM entity queries and convert rows into domain models at this boundary;
//! time-bucketed aggregates use parameterized raw statements whose SQL depends on the
//! connected database backend. Nothing here writes to the database.

pub mod constellation;
pub mod killmail;
pub mod planet;
pub mod region;
pub mod report;
pub mod stargate;
pub mod station;
pub mod system;

#[cfg(test)]
mod test;
