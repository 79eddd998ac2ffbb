//! Planet factory for creating test planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets with customizable fields.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    planet_id: i32,
    name: String,
    system_id: i32,
    planet_type: Option<String>,
    moon_count: i32,
    asteroid_belt_count: i32,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values.
    ///
    /// Defaults:
    /// - planet_id: auto-incremented
    /// - name: `"Planet {id}"`
    /// - planet_type: `None`
    /// - moon_count / asteroid_belt_count: `0`
    pub fn new(db: &'a DatabaseConnection, system_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            planet_id: id,
            name: format!("Planet {}", id),
            system_id,
            planet_type: None,
            moon_count: 0,
            asteroid_belt_count: 0,
        }
    }

    /// Sets the planet ID.
    pub fn planet_id(mut self, planet_id: i32) -> Self {
        self.planet_id = planet_id;
        self
    }

    /// Sets the planet name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the planet type.
    pub fn planet_type(mut self, planet_type: Option<&str>) -> Self {
        self.planet_type = planet_type.map(str::to_string);
        self
    }

    /// Sets the moon and asteroid belt counts.
    pub fn orbitals(mut self, moon_count: i32, asteroid_belt_count: i32) -> Self {
        self.moon_count = moon_count;
        self.asteroid_belt_count = asteroid_belt_count;
        self
    }

    /// Builds and inserts the planet entity into the database.
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            planet_id: ActiveValue::Set(self.planet_id),
            planet_name: ActiveValue::Set(self.name),
            system_id: ActiveValue::Set(self.system_id),
            planet_type: ActiveValue::Set(self.planet_type),
            moon_count: ActiveValue::Set(self.moon_count),
            asteroid_belt_count: ActiveValue::Set(self.asteroid_belt_count),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values inside the given system.
pub async fn create_planet(
    db: &DatabaseConnection,
    system_id: i32,
) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db, system_id).build().await
}
