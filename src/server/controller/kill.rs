//! Kill analytics endpoints.
//!
//! Default modes differ per endpoint: the regional heatmap and the region ranking look
//! at the last hour, everything else at the last day.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::server::{
    controller::params::ModeParams,
    error::AppError,
    model::{
        kill::{KillCount, KillScope, Killmail},
        mode::Mode,
    },
    service::kill::KillService,
    state::AppState,
    util::parse::parse_id,
};

/// Kill summary of a system, bucketed by `mode` (default `day`).
///
/// # Returns
/// - `200 OK` - `{system_id, system_name, mode, total, buckets}`; an unknown system has
///   an empty name and a total of `0`
/// - `400 Bad Request` - `system_id is invalid` or `invalid mode`
/// - `500 Internal Server Error` - Database error
pub async fn get_system_kills(
    State(state): State<AppState>,
    Path(system_id): Path<String>,
    Query(params): Query<ModeParams>,
) -> Result<impl IntoResponse, AppError> {
    let system_id = parse_id("system_id", &system_id)?;

    let summary = KillService::new(&state.db)
        .get_summary(KillScope::System, system_id, params.mode_or(Mode::Day))
        .await
        .map_err(|e| e.while_retrieving(KillScope::System.resource()))?;

    Ok(Json(summary.into_system_dto()))
}

/// Kill summary of a constellation, bucketed by `mode` (default `day`).
///
/// # Returns
/// - `200 OK` - `{constellation_id, constellation_name, mode, total, buckets}`
/// - `400 Bad Request` - `constellation_id is invalid` or `invalid mode`
/// - `500 Internal Server Error` - Database error
pub async fn get_constellation_kills(
    State(state): State<AppState>,
    Path(constellation_id): Path<String>,
    Query(params): Query<ModeParams>,
) -> Result<impl IntoResponse, AppError> {
    let constellation_id = parse_id("constellation_id", &constellation_id)?;

    let summary = KillService::new(&state.db)
        .get_summary(
            KillScope::Constellation,
            constellation_id,
            params.mode_or(Mode::Day),
        )
        .await
        .map_err(|e| e.while_retrieving(KillScope::Constellation.resource()))?;

    Ok(Json(summary.into_constellation_dto()))
}

/// Kill summary of a region, bucketed by `mode` (default `day`).
///
/// # Returns
/// - `200 OK` - `{region_id, region_name, mode, total, buckets}`
/// - `400 Bad Request` - `region_id is invalid` or `invalid mode`
/// - `500 Internal Server Error` - Database error
pub async fn get_region_kills(
    State(state): State<AppState>,
    Path(region_id): Path<String>,
    Query(params): Query<ModeParams>,
) -> Result<impl IntoResponse, AppError> {
    let region_id = parse_id("region_id", &region_id)?;

    let summary = KillService::new(&state.db)
        .get_summary(KillScope::Region, region_id, params.mode_or(Mode::Day))
        .await
        .map_err(|e| e.while_retrieving(KillScope::Region.resource()))?;

    Ok(Json(summary.into_region_dto()))
}

/// Per-system kill heatmap of a region over the last `mode` (default `hour`).
///
/// # Returns
/// - `200 OK` - Every system of the region with its kills in the window, plus the
///   window bounds
/// - `400 Bad Request` - `region_id is invalid` or `invalid mode`
/// - `500 Internal Server Error` - Database error
pub async fn get_region_heatmap(
    State(state): State<AppState>,
    Path(region_id): Path<String>,
    Query(params): Query<ModeParams>,
) -> Result<impl IntoResponse, AppError> {
    let region_id = parse_id("region_id", &region_id)?;

    let heatmap = KillService::new(&state.db)
        .get_region_heatmap(region_id, params.mode_or(Mode::Hour), Utc::now())
        .await
        .map_err(|e| e.while_retrieving("region heatmap"))?;

    Ok(Json(heatmap.into_dto()))
}

/// Latest killmails of a system.
///
/// # Returns
/// - `200 OK` - Up to 15 killmails, newest first, `[]` when there are none
/// - `400 Bad Request` - `system_id is invalid`
/// - `500 Internal Server Error` - Database error
pub async fn get_system_killmails(
    State(state): State<AppState>,
    Path(system_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let system_id = parse_id("system_id", &system_id)?;

    let killmails = KillService::new(&state.db)
        .get_recent_by_system(system_id)
        .await
        .map_err(|e| e.while_retrieving("killmails"))?;

    Ok(Json(
        killmails
            .into_iter()
            .map(Killmail::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Ten regions with the most kills over the last `mode` (default `hour`).
///
/// # Returns
/// - `200 OK` - At most ten rows, busiest first
/// - `400 Bad Request` - `invalid mode`
/// - `500 Internal Server Error` - Database error
pub async fn get_top_regions(
    State(state): State<AppState>,
    Query(params): Query<ModeParams>,
) -> Result<impl IntoResponse, AppError> {
    let ranking = KillService::new(&state.db)
        .get_top(KillScope::Region, params.mode_or(Mode::Hour), Utc::now())
        .await
        .map_err(|e| e.while_retrieving(KillScope::Region.ranking_resource()))?;

    Ok(Json(
        ranking
            .into_iter()
            .map(KillCount::into_region_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Ten constellations with the most kills over the last `mode` (default `day`).
///
/// # Returns
/// - `200 OK` - At most ten rows, busiest first
/// - `400 Bad Request` - `invalid mode`
/// - `500 Internal Server Error` - Database error
pub async fn get_top_constellations(
    State(state): State<AppState>,
    Query(params): Query<ModeParams>,
) -> Result<impl IntoResponse, AppError> {
    let ranking = KillService::new(&state.db)
        .get_top(
            KillScope::Constellation,
            params.mode_or(Mode::Day),
            Utc::now(),
        )
        .await
        .map_err(|e| e.while_retrieving(KillScope::Constellation.ranking_resource()))?;

    Ok(Json(
        ranking
            .into_iter()
            .map(KillCount::into_constellation_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Ten systems with the most kills over the last `mode` (default `day`).
///
/// # Returns
/// - `200 OK` - At most ten rows, busiest first
/// - `400 Bad Request` - `invalid mode`
/// - `500 Internal Server Error` - Database error
pub async fn get_top_systems(
    State(state): State<AppState>,
    Query(params): Query<ModeParams>,
) -> Result<impl IntoResponse, AppError> {
    let ranking = KillService::new(&state.db)
        .get_top(KillScope::System, params.mode_or(Mode::Day), Utc::now())
        .await
        .map_err(|e| e.while_retrieving(KillScope::System.ranking_resource()))?;

    Ok(Json(
        ranking
            .into_iter()
            .map(KillCount::into_system_dto)
            .collect::<Vec<_>>(),
    ))
}
