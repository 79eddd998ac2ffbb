use axum::{extract::State, response::IntoResponse, Json};

use crate::server::{
    error::AppError, model::stargate::Stargate, service::stargate::StargateService,
    state::AppState,
};

/// List every stargate.
///
/// # Returns
/// - `200 OK` - Stargates ordered by name, `[]` when there are none
/// - `500 Internal Server Error` - Database error
pub async fn get_stargates(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stargates = StargateService::new(&state.db)
        .get_all()
        .await
        .map_err(|e| e.while_retrieving("stargates"))?;

    Ok(Json(
        stargates
            .into_iter()
            .map(Stargate::into_dto)
            .collect::<Vec<_>>(),
    ))
}
