//! Constellation factory for creating test constellation entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test constellations with customizable fields.
pub struct ConstellationFactory<'a> {
    db: &'a DatabaseConnection,
    constellation_id: i32,
    name: String,
    region_id: i32,
}

impl<'a> ConstellationFactory<'a> {
    /// Creates a new ConstellationFactory with default values.
    ///
    /// Defaults:
    /// - constellation_id: auto-incremented
    /// - name: `"Constellation {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `region_id` - Region the constellation belongs to
    pub fn new(db: &'a DatabaseConnection, region_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            constellation_id: id,
            name: format!("Constellation {}", id),
            region_id,
        }
    }

    /// Sets the constellation ID.
    pub fn constellation_id(mut self, constellation_id: i32) -> Self {
        self.constellation_id = constellation_id;
        self
    }

    /// Sets the constellation name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the constellation entity into the database.
    pub async fn build(self) -> Result<entity::constellation::Model, DbErr> {
        entity::constellation::ActiveModel {
            constellation_id: ActiveValue::Set(self.constellation_id),
            constellation_name: ActiveValue::Set(self.name),
            region_id: ActiveValue::Set(self.region_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a constellation with default values inside the given region.
pub async fn create_constellation(
    db: &DatabaseConnection,
    region_id: i32,
) -> Result<entity::constellation::Model, DbErr> {
    ConstellationFactory::new(db, region_id).build().await
}
