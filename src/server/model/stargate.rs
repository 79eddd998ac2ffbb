//! Domain model for stargates, the directed edges between systems.

use crate::model::stargate::StargateDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Stargate {
    pub stargate_id: i32,
    pub name: String,
    /// System the gate sits in.
    pub system_id: i32,
    /// Gate on the far side of the jump.
    pub destination_stargate_id: i32,
    pub destination_system_id: i32,
}

impl Stargate {
    /// Converts an entity model to a stargate domain model at the repository boundary.
    pub fn from_entity(entity: entity::stargate::Model) -> Self {
        Self {
            stargate_id: entity.stargate_id,
            name: entity.stargate_name,
            system_id: entity.system_id,
            destination_stargate_id: entity.destination_stargate_id,
            destination_system_id: entity.destination_system_id,
        }
    }

    pub fn into_dto(self) -> StargateDto {
        StargateDto {
            stargate_id: self.stargate_id,
            stargate_name: self.name,
            system_id: self.system_id,
            destination_stargate_id: self.destination_stargate_id,
            destination_system_id: self.destination_system_id,
        }
    }
}
