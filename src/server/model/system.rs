//! Domain model for solar systems.
//!
//! Systems do not store their region; it is resolved from the owning constellation
//! when the system is read, so a `System` always carries both parent ids.

use crate::model::system::SystemDto;

/// A solar system with its position in the map and its parent ids.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub system_id: i32,
    pub name: String,
    pub security_status: f64,
    /// Letter class used by the map tooling, absent for wormhole space.
    pub security_class: Option<String>,
    pub x_pos: f64,
    pub y_pos: f64,
    pub z_pos: f64,
    pub constellation_id: i32,
    pub region_id: i32,
    pub spectral_class: Option<String>,
}

impl System {
    /// Converts a system row joined with its constellation into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The system entity model
    /// - `constellation` - The owning constellation, providing `region_id`
    ///
    /// # Returns
    /// - `System` - The converted system domain model
    pub fn from_entity(
        entity: entity::system::Model,
        constellation: entity::constellation::Model,
    ) -> Self {
        Self {
            system_id: entity.system_id,
            name: entity.system_name,
            security_status: entity.security_status,
            security_class: entity.security_class,
            x_pos: entity.x_pos,
            y_pos: entity.y_pos,
            z_pos: entity.z_pos,
            constellation_id: entity.constellation_id,
            region_id: constellation.region_id,
            spectral_class: entity.spectral_class,
        }
    }

    pub fn into_dto(self) -> SystemDto {
        SystemDto {
            system_id: self.system_id,
            system_name: self.name,
            security_status: self.security_status,
            security_class: self.security_class,
            x_pos: self.x_pos,
            y_pos: self.y_pos,
            z_pos: self.z_pos,
            constellation_id: self.constellation_id,
            region_id: self.region_id,
            spectral_class: self.spectral_class,
        }
    }
}
