use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::server::{
    controller::params::NameParams,
    error::AppError,
    model::{constellation::Constellation, stargate::Stargate, system::System},
    service::{
        constellation::ConstellationService, stargate::StargateService, system::SystemService,
    },
    state::AppState,
    util::parse::parse_id,
};

/// List constellations, or look one up by exact name.
///
/// # Returns
/// - `200 OK` - Array of constellations ordered by name (possibly empty), or a single
///   constellation when `name` is given
/// - `404 Not Found` - No constellation has the given name
/// - `500 Internal Server Error` - Database error
pub async fn get_constellations(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<Response, AppError> {
    let service = ConstellationService::new(&state.db);

    if let Some(name) = params.name() {
        let constellation = service
            .get_by_name(name)
            .await
            .map_err(|e| e.while_retrieving("constellation"))?
            .ok_or_else(|| AppError::NotFound("constellation not found".to_string()))?;

        return Ok(Json(constellation.into_dto()).into_response());
    }

    let constellations = service
        .get_all()
        .await
        .map_err(|e| e.while_retrieving("constellations"))?;

    Ok(Json(
        constellations
            .into_iter()
            .map(Constellation::into_dto)
            .collect::<Vec<_>>(),
    )
    .into_response())
}

/// Get constellations by constellation ID or region ID.
///
/// The ID is matched against both columns, so a constellation ID yields that
/// constellation and a region ID yields every constellation of the region.
///
/// # Returns
/// - `200 OK` - Array of matching constellations
/// - `400 Bad Request` - `constellation_id is invalid`
/// - `404 Not Found` - Nothing matched
/// - `500 Internal Server Error` - Database error
pub async fn get_constellation(
    State(state): State<AppState>,
    Path(constellation_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let constellation_id = parse_id("constellation_id", &constellation_id)?;

    let constellations = ConstellationService::new(&state.db)
        .get_by_id_or_region(constellation_id)
        .await
        .map_err(|e| e.while_retrieving("constellation"))?;

    if constellations.is_empty() {
        return Err(AppError::NotFound("constellation not found".to_string()));
    }

    Ok(Json(
        constellations
            .into_iter()
            .map(Constellation::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// List the systems of a constellation.
///
/// # Returns
/// - `200 OK` - Systems ordered by name
/// - `400 Bad Request` - `constellation_id is invalid`
/// - `404 Not Found` - The constellation has no systems
/// - `500 Internal Server Error` - Database error
pub async fn get_constellation_systems(
    State(state): State<AppState>,
    Path(constellation_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let constellation_id = parse_id("constellation_id", &constellation_id)?;

    let systems = SystemService::new(&state.db)
        .get_by_constellation(constellation_id)
        .await
        .map_err(|e| e.while_retrieving("systems"))?;

    if systems.is_empty() {
        return Err(AppError::NotFound("systems not found".to_string()));
    }

    Ok(Json(
        systems.into_iter().map(System::into_dto).collect::<Vec<_>>(),
    ))
}

/// List every stargate in a constellation.
///
/// # Returns
/// - `200 OK` - Stargates ordered by name
/// - `400 Bad Request` - `constellation_id is invalid`
/// - `404 Not Found` - The constellation has no stargates
/// - `500 Internal Server Error` - Database error
pub async fn get_constellation_stargates(
    State(state): State<AppState>,
    Path(constellation_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let constellation_id = parse_id("constellation_id", &constellation_id)?;

    let stargates = StargateService::new(&state.db)
        .get_by_constellation(constellation_id)
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
