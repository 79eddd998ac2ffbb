//! Shared helper utilities for factory methods.
//!
//! This module provides ID generation and convenience methods for creating entities
//! together with the hierarchy they belong to.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent primary key collisions in tests.
static COUNTER: std::sync::atomic::AtomicI32 = std::sync::atomic::AtomicI32::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `i32` - Next unique counter value
pub fn next_id() -> i32 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a region, a constellation inside it, and a system inside that.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((region, constellation, system))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_system_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::region::Model,
        entity::constellation::Model,
        entity::system::Model,
    ),
    DbErr,
> {
    let region = crate::factory::region::create_region(db).await?;
    let constellation =
        crate::factory::constellation::create_constellation(db, region.region_id).await?;
    let system = crate::factory::system::create_system(db, constellation.constellation_id).await?;

    Ok((region, constellation, system))
}
