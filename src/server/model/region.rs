//! Domain model for regions, the top of the universe hierarchy.

use crate::model::region::RegionDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub region_id: i32,
    pub name: String,
}

impl Region {
    /// Converts an entity model to a region domain model at the repository boundary.
    pub fn from_entity(entity: entity::region::Model) -> Self {
        Self {
            region_id: entity.region_id,
            name: entity.region_name,
        }
    }

    pub fn into_dto(self) -> RegionDto {
        RegionDto {
            region_id: self.region_id,
            region_name: self.name,
        }
    }
}
