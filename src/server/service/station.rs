use sea_orm::DatabaseConnection;

use crate::server::{data::station::StationRepository, error::AppError, model::station::Station};

pub struct StationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Station>, AppError> {
        Ok(StationRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, station_id: i32) -> Result<Option<Station>, AppError> {
        Ok(StationRepository::new(self.db).get_by_id(station_id).await?)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Station>, AppError> {
        Ok(StationRepository::new(self.db).get_by_name(name).await?)
    }

    pub async fn get_by_system(&self, system_id: i32) -> Result<Vec<Station>, AppError> {
        Ok(StationRepository::new(self.db)
            .get_by_system(system_id)
            .await?)
    }
}
