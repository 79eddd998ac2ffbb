use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::planet::Planet;

pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all planets ordered by name
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let planets = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::PlanetName)
            .order_by_asc(entity::planet::Column::PlanetId)
            .all(self.db)
            .await?;

        Ok(planets.into_iter().map(Planet::from_entity).collect())
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<Planet>, DbErr> {
        let planet = entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?;

        Ok(planet.map(Planet::from_entity))
    }

    /// Gets a planet by its exact name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Planet>, DbErr> {
        let planet = entity::prelude::Planet::find()
            .filter(entity::planet::Column::PlanetName.eq(name))
            .order_by_asc(entity::planet::Column::PlanetId)
            .one(self.db)
            .await?;

        Ok(planet.map(Planet::from_entity))
    }

    /// Gets the planets orbiting a system ordered by name
    pub async fn get_by_system(&self, system_id: i32) -> Result<Vec<Planet>, DbErr> {
        let planets = entity::prelude::Planet::find()
            .filter(entity::planet::Column::SystemId.eq(system_id))
            .order_by_asc(entity::planet::Column::PlanetName)
            .order_by_asc(entity::planet::Column::PlanetId)
            .all(self.db)
            .await?;

        Ok(planets.into_iter().map(Planet::from_entity).collect())
    }
}
