//! HTTP request handlers.
//!
//! Controllers parse path and query parameters, call the matching service, and convert
//! domain models into DTOs. Absence is turned into `404`, malformed input into `400`,
//! and database failures into `500 failed to retrieve <resource>` through `AppError`.

pub mod constellation;
pub mod kill;
pub mod params;
pub mod planet;
pub mod region;
pub mod report;
pub mod stargate;
pub mod station;
pub mod system;

#[cfg(test)]
mod test;
