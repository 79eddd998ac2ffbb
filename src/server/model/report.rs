//! Domain models for static universe reports.

use sea_orm::FromQueryResult;

use crate::model::report::SpectralClassCountDto;

/// Number of systems sharing a star spectral class.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct SpectralClassCount {
    pub spectral_class: String,
    pub system_count: i64,
}

impl SpectralClassCount {
    pub fn into_dto(self) -> SpectralClassCountDto {
        SpectralClassCountDto {
            spectral_class: self.spectral_class,
            system_count: self.system_count,
        }
    }
}
