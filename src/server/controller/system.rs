use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::server::{
    controller::params::NameParams,
    error::AppError,
    model::{planet::Planet, stargate::Stargate, station::Station, system::System},
    service::{
        planet::PlanetService, stargate::StargateService, station::StationService,
        system::SystemService,
    },
    state::AppState,
    util::parse::parse_id,
};

/// List systems, or look one up by exact name.
///
/// # Returns
/// - `200 OK` - Array of systems ordered by name (possibly empty), or a single system
///   when `name` is given
/// - `404 Not Found` - No system has the given name
/// - `500 Internal Server Error` - Database error
pub async fn get_systems(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<Response, AppError> {
    let service = SystemService::new(&state.db);

    if let Some(name) = params.name() {
        let system = service
            .get_by_name(name)
            .await
            .map_err(|e| e.while_retrieving("system"))?
            .ok_or_else(|| AppError::NotFound("system not found".to_string()))?;

        return Ok(Json(system.into_dto()).into_response());
    }

    let systems = service
        .get_all()
        .await
        .map_err(|e| e.while_retrieving("systems"))?;

    Ok(Json(systems.into_iter().map(System::into_dto).collect::<Vec<_>>()).into_response())
}

/// Get systems by system ID or constellation ID.
///
/// The ID is matched against both columns, so a system ID yields that system and a
/// constellation ID yields every system of the constellation.
///
/// # Returns
/// - `200 OK` - Array of matching systems
/// - `400 Bad Request` - `system_id is invalid`
/// - `404 Not Found` - Nothing matched
/// - `500 Internal Server Error` - Database error
pub async fn get_system(
    State(state): State<AppState>,
    Path(system_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let system_id = parse_id("system_id", &system_id)?;

    let systems = SystemService::new(&state.db)
        .get_by_id_or_constellation(system_id)
        .await
        .map_err(|e| e.while_retrieving("system"))?;

    if systems.is_empty() {
        return Err(AppError::NotFound("system not found".to_string()));
    }

    Ok(Json(
        systems.into_iter().map(System::into_dto).collect::<Vec<_>>(),
    ))
}

/// List the stargates of a system.
///
/// # Returns
/// - `200 OK` - Stargates ordered by name
/// - `400 Bad Request` - `system_id is invalid`
/// - `404 Not Found` - The system has no stargates
/// - `500 Internal Server Error` - Database error
pub async fn get_system_stargates(
    State(state): State<AppState>,
    Path(system_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let system_id = parse_id("system_id", &system_id)?;

    let stargates = StargateService::new(&state.db)
        .get_by_system(system_id)
        .await
        .map_err(|e| e.while_retrieving("stargates"))?;

    if stargates.is_empty() {
        return Err(AppError::NotFound("stargates not found".to_string()));
    }

    Ok(Json(
        stargates
            .into_iter()
            .map(Stargate::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// List the planets of a system.
///
/// # Returns
/// - `200 OK` - Planets ordered by name
/// - `400 Bad Request` - `system_id is invalid`
/// - `404 Not Found` - The system has no planets
/// - `500 Internal Server Error` - Database error
pub async fn get_system_planets(
    State(state): State<AppState>,
    Path(system_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let system_id = parse_id("system_id", &system_id)?;

    let planets = PlanetService::new(&state.db)
        .get_by_system(system_id)
        .await
        .map_err(|e| e.while_retrieving("planets"))?;

    if planets.is_empty() {
        return Err(AppError::NotFound("planets not found".to_string()));
    }

    Ok(Json(
        planets.into_iter().map(Planet::into_dto).collect::<Vec<_>>(),
    ))
}

/// List the stations of a system.
///
/// # Returns
/// - `200 OK` - Stations ordered by name
/// - `400 Bad Request` - `system_id is invalid`
/// - `404 Not Found` - The system has no stations
/// - `500 Internal Server Error` - Database error
pub async fn get_system_stations(
    State(state): State<AppState>,
    Path(system_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let system_id = parse_id("system_id", &system_id)?;

    let stations = StationService::new(&state.db)
        .get_by_system(system_id)
        .await
        .map_err(|e| e.while_retrieving("stations"))?;

    if stations.is_empty() {
        return Err(AppError::NotFound("stations not found".to_string()));
    }

    Ok(Json(
        stations
            .into_iter()
            .map(Station::into_dto)
            .collect::<Vec<_>>(),
    ))
}
