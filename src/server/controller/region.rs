use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::server::{
    controller::params::NameParams,
    error::AppError,
    model::{constellation::Constellation, region::Region, stargate::Stargate, system::System},
    service::{
        constellation::ConstellationService, region::RegionService, stargate::StargateService,
        system::SystemService,
    },
    state::AppState,
    util::parse::parse_id,
};

/// List regions, or look one up by exact name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Optional `name` filter
///
/// # Returns
/// - `200 OK` - Array of regions ordered by name (possibly empty), or a single region
///   when `name` is given
/// - `404 Not Found` - No region has the given name
/// - `500 Internal Server Error` - Database error
pub async fn get_regions(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<Response, AppError> {
    let service = RegionService::new(&state.db);

    if let Some(name) = params.name() {
        let region = service
            .get_by_name(name)
            .await
            .map_err(|e| e.while_retrieving("region"))?
            .ok_or_else(|| AppError::NotFound("region not found".to_string()))?;

        return Ok(Json(region.into_dto()).into_response());
    }

    let regions = service
        .get_all()
        .await
        .map_err(|e| e.while_retrieving("regions"))?;

    Ok(Json(regions.into_iter().map(Region::into_dto).collect::<Vec<_>>()).into_response())
}

/// Get a single region.
///
/// # Returns
/// - `200 OK` - The region
/// - `400 Bad Request` - `region_id is invalid`
/// - `404 Not Found` - `region not found`
/// - `500 Internal Server Error` - Database error
pub async fn get_region(
    State(state): State<AppState>,
    Path(region_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let region_id = parse_id("region_id", &region_id)?;

    let region = RegionService::new(&state.db)
        .get_by_id(region_id)
        .await
        .map_err(|e| e.while_retrieving("region"))?
        .ok_or_else(|| AppError::NotFound("region not found".to_string()))?;

    Ok(Json(region.into_dto()))
}

/// List the constellations of a region.
///
/// # Returns
/// - `200 OK` - Constellations ordered by name
/// - `400 Bad Request` - `region_id is invalid`
/// - `404 Not Found` - The region has no constellations
/// - `500 Internal Server Error` - Database error
pub async fn get_region_constellations(
    State(state): State<AppState>,
    Path(region_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let region_id = parse_id("region_id", &region_id)?;

    let constellations = ConstellationService::new(&state.db)
        .get_by_region(region_id)
        .await
        .map_err(|e| e.while_retrieving("constellations"))?;

    if constellations.is_empty() {
        return Err(AppError::NotFound("constellations not found".to_string()));
    }

    Ok(Json(
        constellations
            .into_iter()
            .map(Constellation::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// List every system in a region.
///
/// # Returns
/// - `200 OK` - Systems ordered by name
/// - `400 Bad Request` - `region_id is invalid`
/// - `404 Not Found` - The region has no systems
/// - `500 Internal Server Error` - Database error
pub async fn get_region_systems(
    State(state): State<AppState>,
    Path(region_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let region_id = parse_id("region_id", &region_id)?;

    let systems = SystemService::new(&state.db)
        .get_by_region(region_id)
        .await
        .map_err(|e| e.while_retrieving("systems"))?;

    if systems.is_empty() {
        return Err(AppError::NotFound("systems not found".to_string()));
    }

    Ok(Json(
        systems.into_iter().map(System::into_dto).collect::<Vec<_>>(),
    ))
}

/// List every stargate in a region.
///
/// # Returns
/// - `200 OK` - Stargates ordered by name
/// - `400 Bad Request` - `region_id is invalid`
/// - `404 Not Found` - The region has no stargates
/// - `500 Internal Server Error` - Database error
pub async fn get_region_stargates(
    State(state): State<AppState>,
    Path(region_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let region_id = parse_id("region_id", &region_id)?;

    let stargates = StargateService::new(&state.db)
        .get_by_region(region_id)
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
