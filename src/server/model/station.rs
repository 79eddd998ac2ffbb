use crate::model::station::StationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub station_id: i32,
    pub name: String,
    pub system_id: i32,
}

impl Station {
    /// Converts an entity model to a station domain model at the repository boundary.
    pub fn from_entity(entity: entity::station::Model) -> Self {
        Self {
            station_id: entity.station_id,
            name: entity.station_name,
            system_id: entity.system_id,
        }
    }

    pub fn into_dto(self) -> StationDto {
        StationDto {
            station_id: self.station_id,
            station_name: self.name,
            system_id: self.system_id,
        }
    }
}
