//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting universe and killmail rows with
//! sensible defaults, reducing boilerplate in tests. Each entity has its own factory
//! module with both a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let region = factory::create_region(&db).await?;
//! let constellation = factory::create_constellation(&db, region.region_id).await?;
//! let system = factory::create_system(&db, constellation.constellation_id).await?;
//!
//! // Or the whole chain at once
//! let (region, constellation, system) = factory::helpers::create_system_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let jita = factory::system::SystemFactory::new(&db, constellation.constellation_id)
//!     .system_id(30000142)
//!     .name("Jita")
//!     .security_status(0.946)
//!     .build()
//!     .await?;
//! ```

pub mod constellation;
pub mod helpers;
pub mod killmail;
pub mod planet;
pub mod region;
pub mod stargate;
pub mod station;
pub mod system;

pub use constellation::create_constellation;
pub use killmail::create_killmail;
pub use planet::create_planet;
pub use region::create_region;
pub use stargate::create_stargate;
pub use station::create_station;
pub use system::create_system;
