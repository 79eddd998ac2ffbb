use sea_orm::DatabaseConnection;

use crate::server::{data::planet::PlanetRepository, error::AppError, model::planet::Planet};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        Ok(PlanetRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<Planet>, AppError> {
        Ok(PlanetRepository::new(self.db).get_by_id(planet_id).await?)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Planet>, AppError> {
        Ok(PlanetRepository::new(self.db).get_by_name(name).await?)
    }

    pub async fn get_by_system(&self, system_id: i32) -> Result<Vec<Planet>, AppError> {
        Ok(PlanetRepository::new(self.db)
            .get_by_system(system_id)
            .await?)
    }
}
