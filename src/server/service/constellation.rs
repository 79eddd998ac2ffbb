use sea_orm::DatabaseConnection;

use crate::server::{
    data::constellation::ConstellationRepository, error::AppError,
    model::constellation::Constellation,
};

pub struct ConstellationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConstellationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all constellations ordered by name
    pub async fn get_all(&self) -> Result<Vec<Constellation>, AppError> {
        Ok(ConstellationRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Constellation>, AppError> {
        Ok(ConstellationRepository::new(self.db)
            .get_by_name(name)
            .await?)
    }

    /// Gets constellations matching `id` either as constellation ID or region ID
    pub async fn get_by_id_or_region(&self, id: i32) -> Result<Vec<Constellation>, AppError> {
        Ok(ConstellationRepository::new(self.db)
            .get_by_id_or_region(id)
            .await?)
    }

    pub async fn get_by_region(&self, region_id: i32) -> Result<Vec<Constellation>, AppError> {
        Ok(ConstellationRepository::new(self.db)
            .get_by_region(region_id)
            .await?)
    }
}
