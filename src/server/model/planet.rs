use crate::model::planet::PlanetDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub planet_id: i32,
    pub name: String,
    pub system_id: i32,
    pub planet_type: Option<String>,
    pub moon_count: i32,
    pub asteroid_belt_count: i32,
}

impl Planet {
    /// Converts an entity model to a planet domain model at the repository boundary.
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            planet_id: entity.planet_id,
            name: entity.planet_name,
            system_id: entity.system_id,
            planet_type: entity.planet_type,
            moon_count: entity.moon_count,
            asteroid_belt_count: entity.asteroid_belt_count,
        }
    }

    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            planet_id: self.planet_id,
            planet_name: self.name,
            system_id: self.system_id,
            planet_type: self.planet_type,
            moon_count: self.moon_count,
            asteroid_belt_count: self.asteroid_belt_count,
        }
    }
}
