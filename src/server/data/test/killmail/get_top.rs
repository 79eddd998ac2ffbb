use super::*;

/// Tests ranking systems by kills.
///
/// Verifies the `(start, end]` window, descending order, and ascending-ID tie-break.
///
/// Expected: Ok(Vec) of systems with at least one kill in the window
#[tokio::test]
async fn ranks_systems_by_kill_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .with_killmail_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, kimotoro, jita) = factory::helpers::create_system_with_dependencies(db).await?;
    let perimeter = factory::create_system(db, kimotoro.constellation_id).await?;
    let maurasi = factory::create_system(db, kimotoro.constellation_id).await?;
    let quiet = factory::create_system(db, kimotoro.constellation_id).await?;

    let end = fixed_now();
    let start = Mode::Day.window_start(end);

    for _ in 0..3 {
        factory::create_killmail(db, jita.system_id, end - Duration::hours(2)).await?;
    }
    factory::create_killmail(db, maurasi.system_id, end).await?;
    factory::create_killmail(db, perimeter.system_id, end - Duration::hours(1)).await?;
    factory::create_killmail(db, quiet.system_id, start).await?;
    factory::create_killmail(db, quiet.system_id, end + Duration::seconds(1)).await?;

    let ranking = KillmailRepository::new(db)
        .get_top(KillScope::System, start, end, 10)
        .await?;

    let rows: Vec<_> = ranking.iter().map(|r| (r.id, r.kill_count)).collect();
    assert_eq!(
        rows,
        vec![
            (jita.system_id, 3),
            (perimeter.system_id, 1),
            (maurasi.system_id, 1),
        ]
    );
    assert_eq!(ranking[0].name, jita.system_name);

    Ok(())
}

/// Tests that rankings are cut at the limit.
///
/// Expected: Ok(Vec) with exactly `limit` rows
#[tokio::test]
async fn truncates_ranking_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .with_killmail_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let end = fixed_now();
    for _ in 0..12 {
        let (_, _, system) = factory::helpers::create_system_with_dependencies(db).await?;
        factory::create_killmail(db, system.system_id, end - Duration::minutes(5)).await?;
    }

    let repo = KillmailRepository::new(db);
    let start = Mode::Hour.window_start(end);

    for scope in [KillScope::System, KillScope::Constellation, KillScope::Region] {
        let ranking = repo.get_top(scope, start, end, 10).await?;
        assert_eq!(ranking.len(), 10);
        assert!(ranking.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    Ok(())
}

/// Tests ranking regions and constellations.
///
/// Expected: Ok(Vec) with kills rolled up to the parent scope
#[tokio::test]
async fn rolls_kills_up_to_parent_scopes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .with_killmail_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (forge, kimotoro, jita) = factory::helpers::create_system_with_dependencies(db).await?;
    let perimeter = factory::create_system(db, kimotoro.constellation_id).await?;
    let (domain, throne_worlds, amarr) =
        factory::helpers::create_system_with_dependencies(db).await?;

    let end = fixed_now();
    factory::create_killmail(db, jita.system_id, end).await?;
    factory::create_killmail(db, perimeter.system_id, end).await?;
    factory::create_killmail(db, amarr.system_id, end).await?;

    let repo = KillmailRepository::new(db);
    let start = Mode::Week.window_start(end);

    let regions = repo.get_top(KillScope::Region, start, end, 10).await?;
    let rows: Vec<_> = regions
        .iter()
        .map(|r| (r.id, r.name.as_str(), r.kill_count))
        .collect();
    assert_eq!(
        rows,
        vec![
            (forge.region_id, forge.region_name.as_str(), 2),
            (domain.region_id, domain.region_name.as_str(), 1),
        ]
    );

    let constellations = repo
        .get_top(KillScope::Constellation, start, end, 10)
        .await?;
    let rows: Vec<_> = constellations.iter().map(|c| (c.id, c.kill_count)).collect();
    assert_eq!(
        rows,
        vec![
            (kimotoro.constellation_id, 2),
            (throne_worlds.constellation_id, 1),
        ]
    );

    Ok(())
}
