use sea_orm::DatabaseConnection;

use crate::server::{data::region::RegionRepository, error::AppError, model::region::Region};

pub struct RegionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all regions ordered by name
    pub async fn get_all(&self) -> Result<Vec<Region>, AppError> {
        Ok(RegionRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, region_id: i32) -> Result<Option<Region>, AppError> {
        Ok(RegionRepository::new(self.db).get_by_id(region_id).await?)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Region>, AppError> {
        Ok(RegionRepository::new(self.db).get_by_name(name).await?)
    }
}
