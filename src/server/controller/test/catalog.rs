use super::*;

/// Tests the flat stargate, planet, and station collections.
///
/// Expected: `[]` on an empty database, rows once data exists
#[tokio::test]
async fn flat_collections_are_never_null() -> Result<(), DbErr> {
    let db = setup().await;

    for uri in [
        "/stargates",
        "/planets",
        "/stations",
        "/reports/spectral-class-counts",
    ] {
        let (status, body) = get(&db, uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, Value::Array(vec![]), "{}", uri);
    }

    let (_, kimotoro, jita) = factory::helpers::create_system_with_dependencies(&db).await?;
    let perimeter = factory::create_system(&db, kimotoro.constellation_id).await?;
    factory::create_stargate(&db, jita.system_id, perimeter.system_id).await?;
    factory::create_planet(&db, jita.system_id).await?;
    factory::create_station(&db, jita.system_id).await?;

    for uri in ["/stargates", "/planets", "/stations"] {
        let (_, body) = get(&db, uri).await;
        assert_eq!(body.as_array().unwrap().len(), 1, "{}", uri);
    }

    Ok(())
}

/// Tests single planet and station lookups.
///
/// Expected: 200 by ID or name, 404 when absent, 400 for malformed IDs
#[tokio::test]
async fn finds_planets_and_stations() -> Result<(), DbErr> {
    let db = setup().await;
    let (_, _, jita) = factory::helpers::create_system_with_dependencies(&db).await?;
    let planet = factory::planet::PlanetFactory::new(&db, jita.system_id)
        .name("Jita IV")
        .orbitals(12, 1)
        .build()
        .await?;
    let station = factory::station::StationFactory::new(&db, jita.system_id)
        .name("Jita IV - Moon 4 - Caldari Navy Assembly Plant")
        .build()
        .await?;

    let (status, body) = get(&db, &format!("/planets/{}", planet.planet_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["moon_count"], 12);
    assert_eq!(body["asteroid_belt_count"], 1);

    let (status, body) = get(&db, "/planets?name=Jita%20IV").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["planet_id"], planet.planet_id);

    let (status, body) = get(&db, &format!("/stations/{}", station.station_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["system_id"], jita.system_id);

    let (status, body) = get(
        &db,
        "/stations?name=Jita%20IV%20-%20Moon%204%20-%20Caldari%20Navy%20Assembly%20Plant",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["station_id"], station.station_id);

    let (status, body) = get(&db, "/planets/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "planet not found");

    let (status, body) = get(&db, "/stations?name=Nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "station not found");

    let (status, body) = get(&db, "/planets/iv").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "planet_id is invalid");

    let (status, body) = get(&db, "/stations/iv").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "station_id is invalid");

    Ok(())
}

/// Tests the spectral class report.
///
/// Expected: counts ordered by `system_count` descending
#[tokio::test]
async fn reports_spectral_class_counts() -> Result<(), DbErr> {
    let db = setup().await;
    let region = factory::create_region(&db).await?;
    let constellation = factory::create_constellation(&db, region.region_id).await?;
    for class in [Some("G5 V"), Some("M0 V"), Some("M0 V"), None] {
        factory::system::SystemFactory::new(&db, constellation.constellation_id)
            .spectral_class(class)
            .build()
            .await?;
    }

    let (status, body) = get(&db, "/reports/spectral-class-counts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["spectral_class"], "M0 V");
    assert_eq!(body[0]["system_count"], 2);
    assert_eq!(body[1]["spectral_class"], "G5 V");
    assert_eq!(body.as_array().unwrap().len(), 2);

    Ok(())
}
