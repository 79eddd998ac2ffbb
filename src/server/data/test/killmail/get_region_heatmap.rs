use super::*;

/// Tests the per-system heatmap of a region.
///
/// Verifies that both window bounds are inclusive, kills outside the window or region
/// are ignored, and quiet systems are still listed with zero kills.
///
/// Expected: Ok(Vec) with every system of the region ordered by kills descending
#[tokio::test]
async fn includes_every_system_in_region() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .with_killmail_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (forge, kimotoro, jita) = factory::helpers::create_system_with_dependencies(db).await?;
    let perimeter = factory::create_system(db, kimotoro.constellation_id).await?;
    let otsela = factory::create_constellation(db, forge.region_id).await?;
    let ikuchi = factory::create_system(db, otsela.constellation_id).await?;
    let (_, _, amarr) = factory::helpers::create_system_with_dependencies(db).await?;

    let end = fixed_now();
    let start = Mode::Hour.window_start(end);

    factory::create_killmail(db, jita.system_id, end - Duration::minutes(30)).await?;
    factory::create_killmail(db, jita.system_id, end).await?;
    factory::create_killmail(db, jita.system_id, start - Duration::minutes(1)).await?;
    factory::create_killmail(db, perimeter.system_id, start).await?;
    factory::create_killmail(db, amarr.system_id, end).await?;

    let points = KillmailRepository::new(db)
        .get_region_heatmap(forge.region_id, start, end)
        .await?;

    let rows: Vec<_> = points.iter().map(|p| (p.system_id, p.kills)).collect();
    assert_eq!(
        rows,
        vec![
            (jita.system_id, 2),
            (perimeter.system_id, 1),
            (ikuchi.system_id, 0),
        ]
    );
    assert_eq!(points[0].destroyed_value, 200.0);
    assert_eq!(points[2].destroyed_value, 0.0);
    assert_eq!(points[2].dropped_value, 0.0);

    Ok(())
}

/// Tests a region without any kills.
///
/// Expected: Ok(Vec) with every system at zero, ties ordered by system ID
#[tokio::test]
async fn lists_quiet_region_with_zero_kills() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .with_killmail_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (forge, kimotoro, jita) = factory::helpers::create_system_with_dependencies(db).await?;
    let perimeter = factory::create_system(db, kimotoro.constellation_id).await?;

    let end = fixed_now();
    let points = KillmailRepository::new(db)
        .get_region_heatmap(forge.region_id, Mode::Day.window_start(end), end)
        .await?;

    let rows: Vec<_> = points.iter().map(|p| (p.system_id, p.kills)).collect();
    assert_eq!(rows, vec![(jita.system_id, 0), (perimeter.system_id, 0)]);

    Ok(())
}
