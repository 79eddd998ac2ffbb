//! Domain model for constellations.

use crate::model::constellation::ConstellationDto;

/// A group of systems inside a single region.
#[derive(Debug, Clone, PartialEq)]
pub struct Constellation {
    pub constellation_id: i32,
    pub name: String,
    pub region_id: i32,
}

impl Constellation {
    /// Converts an entity model to a constellation domain model at the repository boundary.
    pub fn from_entity(entity: entity::constellation::Model) -> Self {
        Self {
            constellation_id: entity.constellation_id,
            name: entity.constellation_name,
            region_id: entity.region_id,
        }
    }

    pub fn into_dto(self) -> ConstellationDto {
        ConstellationDto {
            constellation_id: self.constellation_id,
            constellation_name: self.name,
            region_id: self.region_id,
        }
    }
}
