//! Region factory for creating test region entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test regions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let forge = RegionFactory::new(&db)
///     .region_id(10000002)
///     .name("The Forge")
///     .build()
///     .await?;
/// ```
pub struct RegionFactory<'a> {
    db: &'a DatabaseConnection,
    region_id: i32,
    name: String,
}

impl<'a> RegionFactory<'a> {
    /// Creates a new RegionFactory with default values.
    ///
    /// Defaults:
    /// - region_id: auto-incremented
    /// - name: `"Region {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            region_id: id,
            name: format!("Region {}", id),
        }
    }

    /// Sets the region ID.
    pub fn region_id(mut self, region_id: i32) -> Self {
        self.region_id = region_id;
        self
    }

    /// Sets the region name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the region entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::region::Model)` - Created region entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::region::Model, DbErr> {
        entity::region::ActiveModel {
            region_id: ActiveValue::Set(self.region_id),
            region_name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a region with default values.
///
/// Shorthand for `RegionFactory::new(db).build().await`.
pub async fn create_region(db: &DatabaseConnection) -> Result<entity::region::Model, DbErr> {
    RegionFactory::new(db).build().await
}
