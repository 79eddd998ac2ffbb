use sea_orm::DatabaseConnection;

use crate::server::{
    data::report::ReportRepository, error::AppError, model::report::SpectralClassCount,
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts systems per star spectral class, most common first
    pub async fn get_spectral_class_counts(&self) -> Result<Vec<SpectralClassCount>, AppError> {
        Ok(ReportRepository::new(self.db)
            .get_spectral_class_counts()
            .await?)
    }
}
