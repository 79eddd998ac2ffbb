use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::server::{
    controller::params::NameParams, error::AppError, model::planet::Planet,
    service::planet::PlanetService, state::AppState, util::parse::parse_id,
};

/// List planets, or look one up by exact name.
///
/// # Returns
/// - `200 OK` - Array of planets ordered by name (possibly empty), or a single planet
///   when `name` is given
/// - `404 Not Found` - No planet has the given name
/// - `500 Internal Server Error` - Database error
pub async fn get_planets(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<Response, AppError> {
    let service = PlanetService::new(&state.db);

    if let Some(name) = params.name() {
        let planet = service
            .get_by_name(name)
            .await
            .map_err(|e| e.while_retrieving("planet"))?
            .ok_or_else(|| AppError::NotFound("planet not found".to_string()))?;

        return Ok(Json(planet.into_dto()).into_response());
    }

    let planets = service
        .get_all()
        .await
        .map_err(|e| e.while_retrieving("planets"))?;

    Ok(Json(planets.into_iter().map(Planet::into_dto).collect::<Vec<_>>()).into_response())
}

/// Get a single planet.
///
/// # Returns
/// - `200 OK` - The planet
/// - `400 Bad Request` - `planet_id is invalid`
/// - `404 Not Found` - `planet not found`
/// - `500 Internal Server Error` - Database error
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let planet_id = parse_id("planet_id", &planet_id)?;

    let planet = PlanetService::new(&state.db)
        .get_by_id(planet_id)
        .await
        .map_err(|e| e.while_retrieving("planet"))?
        .ok_or_else(|| AppError::NotFound("planet not found".to_string()))?;

    Ok(Json(planet.into_dto()))
}
