use sea_orm::DatabaseConnection;

use crate::server::{data::system::SystemRepository, error::AppError, model::system::System};

pub struct SystemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SystemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all systems ordered by name
    pub async fn get_all(&self) -> Result<Vec<System>, AppError> {
        Ok(SystemRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<System>, AppError> {
        Ok(SystemRepository::new(self.db).get_by_name(name).await?)
    }

    /// Gets systems matching `id` either as system ID or constellation ID
    pub async fn get_by_id_or_constellation(&self, id: i32) -> Result<Vec<System>, AppError> {
        Ok(SystemRepository::new(self.db)
            .get_by_id_or_constellation(id)
            .await?)
    }

    pub async fn get_by_constellation(
        &self,
        constellation_id: i32,
    ) -> Result<Vec<System>, AppError> {
        Ok(SystemRepository::new(self.db)
            .get_by_constellation(constellation_id)
            .await?)
    }

    pub async fn get_by_region(&self, region_id: i32) -> Result<Vec<System>, AppError> {
        Ok(SystemRepository::new(self.db)
            .get_by_region(region_id)
            .await?)
    }
}
