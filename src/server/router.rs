use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    controller::{
        constellation::{
            get_constellation, get_constellation_stargates, get_constellation_systems,
            get_constellations,
        },
        kill::{
            get_constellation_kills, get_region_heatmap, get_region_kills, get_system_killmails,
            get_system_kills, get_top_constellations, get_top_regions, get_top_systems,
        },
        planet::{get_planet, get_planets},
        region::{
            get_region, get_region_constellations, get_region_stargates, get_region_systems,
            get_regions,
        },
        report::get_spectral_class_counts,
        stargate::get_stargates,
        station::{get_station, get_stations},
        system::{
            get_system, get_system_planets, get_system_stargates, get_system_stations,
            get_systems,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/regions", get(get_regions))
        .route("/regions/{region_id}", get(get_region))
        .route(
            "/regions/{region_id}/constellations",
            get(get_region_constellations),
        )
        .route("/regions/{region_id}/systems", get(get_region_systems))
        .route("/regions/{region_id}/stargates", get(get_region_stargates))
        .route("/regions/{region_id}/heatmap", get(get_region_heatmap))
        .route("/regions/{region_id}/kills/summary", get(get_region_kills))
        .route("/constellations", get(get_constellations))
        .route("/constellations/{constellation_id}", get(get_constellation))
        .route(
            "/constellations/{constellation_id}/systems",
            get(get_constellation_systems),
        )
        .route(
            "/constellations/{constellation_id}/stargates",
            get(get_constellation_stargates),
        )
        .route(
            "/constellations/{constellation_id}/kills/summary",
            get(get_constellation_kills),
        )
        .route("/systems", get(get_systems))
        .route("/systems/{system_id}", get(get_system))
        .route("/systems/{system_id}/stargates", get(get_system_stargates))
        .route("/systems/{system_id}/planets", get(get_system_planets))
        .route("/systems/{system_id}/stations", get(get_system_stations))
        .route("/systems/{system_id}/killmails", get(get_system_killmails))
        .route("/systems/{system_id}/kills/summary", get(get_system_kills))
        .route("/stargates", get(get_stargates))
        .route("/planets", get(get_planets))
        .route("/planets/{planet_id}", get(get_planet))
        .route("/stations", get(get_stations))
        .route("/stations/{station_id}", get(get_station))
        .route(
            "/reports/spectral-class-counts",
            get(get_spectral_class_counts),
        )
        .route("/rankings/regions/top", get(get_top_regions))
        .route("/rankings/constellations/top", get(get_top_constellations))
        .route("/rankings/systems/top", get(get_top_systems))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        )
}
