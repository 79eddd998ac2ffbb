//! Solar system factory for creating test system entities.
//!
//! This module provides factory methods for creating system entities with
//! sensible defaults. Optional classification columns default to `None`.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test systems with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let system = SystemFactory::new(&db, constellation.constellation_id)
///     .name("Jita")
///     .spectral_class(Some("K7 V"))
///     .build()
///     .await?;
/// ```
pub struct SystemFactory<'a> {
    db: &'a DatabaseConnection,
    system_id: i32,
    name: String,
    security_status: f64,
    security_class: Option<String>,
    position: (f64, f64, f64),
    constellation_id: i32,
    spectral_class: Option<String>,
}

impl<'a> SystemFactory<'a> {
    /// Creates a new SystemFactory with default values.
    ///
    /// Defaults:
    /// - system_id: auto-incremented
    /// - name: `"System {id}"`
    /// - security_status: `0.5`
    /// - security_class: `None`
    /// - position: origin
    /// - spectral_class: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `constellation_id` - Constellation the system belongs to
    pub fn new(db: &'a DatabaseConnection, constellation_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            system_id: id,
            name: format!("System {}", id),
            security_status: 0.5,
            security_class: None,
            position: (0.0, 0.0, 0.0),
            constellation_id,
            spectral_class: None,
        }
    }

    /// Sets the system ID.
    pub fn system_id(mut self, system_id: i32) -> Self {
        self.system_id = system_id;
        self
    }

    /// Sets the system name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the security status.
    pub fn security_status(mut self, security_status: f64) -> Self {
        self.security_status = security_status;
        self
    }

    /// Sets the security class.
    pub fn security_class(mut self, security_class: Option<&str>) -> Self {
        self.security_class = security_class.map(str::to_string);
        self
    }

    /// Sets the x/y/z position.
    pub fn position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = (x, y, z);
        self
    }

    /// Sets the spectral class of the system's star.
    pub fn spectral_class(mut self, spectral_class: Option<&str>) -> Self {
        self.spectral_class = spectral_class.map(str::to_string);
        self
    }

    /// Builds and inserts the system entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::system::Model)` - Created system entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::system::Model, DbErr> {
        let (x, y, z) = self.position;

        entity::system::ActiveModel {
            system_id: ActiveValue::Set(self.system_id),
            system_name: ActiveValue::Set(self.name),
            security_status: ActiveValue::Set(self.security_status),
            security_class: ActiveValue::Set(self.security_class),
            x_pos: ActiveValue::Set(x),
            y_pos: ActiveValue::Set(y),
            z_pos: ActiveValue::Set(z),
            constellation_id: ActiveValue::Set(self.constellation_id),
            spectral_class: ActiveValue::Set(self.spectral_class),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a system with default values inside the given constellation.
pub async fn create_system(
    db: &DatabaseConnection,
    constellation_id: i32,
) -> Result<entity::system::Model, DbErr> {
    SystemFactory::new(db, constellation_id).build().await
}
