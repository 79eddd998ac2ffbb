use axum::{extract::State, response::IntoResponse, Json};

use crate::server::{
    error::AppError, model::report::SpectralClassCount, service::report::ReportService,
    state::AppState,
};

/// Count systems per star spectral class.
///
/// # Returns
/// - `200 OK` - Counts ordered by `system_count` descending, `[]` when no system is classified
/// - `500 Internal Server Error` - Database error
pub async fn get_spectral_class_counts(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let counts = ReportService::new(&state.db)
        .get_spectral_class_counts()
        .await
        .map_err(|e| e.while_retrieving("spectral class counts"))?;

    Ok(Json(
        counts
            .into_iter()
            .map(SpectralClassCount::into_dto)
            .collect::<Vec<_>>(),
    ))
}
