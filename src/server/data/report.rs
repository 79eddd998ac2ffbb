use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, Statement};

use crate::server::model::report::SpectralClassCount;

pub struct ReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts systems per spectral class, most common class first
    ///
    /// Systems without a spectral class are not counted.
    pub async fn get_spectral_class_counts(&self) -> Result<Vec<SpectralClassCount>, DbErr> {
        let stmt = Statement::from_string(
            self.db.get_database_backend(),
            "SELECT spectral_class, COUNT(system_id) AS system_count \
             FROM systems \
             WHERE spectral_class IS NOT NULL \
             GROUP BY spectral_class \
             ORDER BY system_count DESC, spectral_class ASC",
        );

        SpectralClassCount::find_by_statement(stmt)
            .all(self.db)
            .await
    }
}
