use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::server::{
    controller::params::NameParams, error::AppError, model::station::Station,
    service::station::StationService, state::AppState, util::parse::parse_id,
};

/// List stations, or look one up by exact name.
///
/// # Returns
/// - `200 OK` - Array of stations ordered by name (possibly empty), or a single station
///   when `name` is given
/// - `404 Not Found` - No station has the given name
/// - `500 Internal Server Error` - Database error
pub async fn get_stations(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<Response, AppError> {
    let service = StationService::new(&state.db);

    if let Some(name) = params.name() {
        let station = service
            .get_by_name(name)
            .await
            .map_err(|e| e.while_retrieving("station"))?
            .ok_or_else(|| AppError::NotFound("station not found".to_string()))?;

        return Ok(Json(station.into_dto()).into_response());
    }

    let stations = service
        .get_all()
        .await
        .map_err(|e| e.while_retrieving("stations"))?;

    Ok(Json(stations.into_iter().map(Station::into_dto).collect::<Vec<_>>()).into_response())
}

/// Get a single station.
///
/// # Returns
/// - `200 OK` - The station
/// - `400 Bad Request` - `station_id is invalid`
/// - `404 Not Found` - `station not found`
/// - `500 Internal Server Error` - Database error
pub async fn get_station(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let station_id = parse_id("station_id", &station_id)?;

    let station = StationService::new(&state.db)
        .get_by_id(station_id)
        .await
        .map_err(|e| e.while_retrieving("station"))?
        .ok_or_else(|| AppError::NotFound("station not found".to_string()))?;

    Ok(Json(station.into_dto()))
}
