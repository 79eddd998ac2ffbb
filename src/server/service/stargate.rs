use sea_orm::DatabaseConnection;

use crate::server::{
    data::stargate::StargateRepository, error::AppError, model::stargate::Stargate,
};

pub struct StargateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StargateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Stargate>, AppError> {
        Ok(StargateRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_system(&self, system_id: i32) -> Result<Vec<Stargate>, AppError> {
        Ok(StargateRepository::new(self.db)
            .get_by_system(system_id)
            .await?)
    }

    pub async fn get_by_constellation(
        &self,
        constellation_id: i32,
    ) -> Result<Vec<Stargate>, AppError> {
        Ok(StargateRepository::new(self.db)
            .get_by_constellation(constellation_id)
            .await?)
    }

    pub async fn get_by_region(&self, region_id: i32) -> Result<Vec<Stargate>, AppError> {
        Ok(StargateRepository::new(self.db)
            .get_by_region(region_id)
            .await?)
    }
}
