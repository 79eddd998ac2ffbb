use super::*;

/// Inserts kills into `system_id` at the given times with destroyed/dropped values of
/// 100/50.
async fn seed_kills(
    db: &sea_orm::DatabaseConnection,
    system_id: i32,
    times: &[DateTime<Utc>],
) -> Result<(), DbErr> {
    for time in times {
        factory::killmail::KillmailFactory::new(db, system_id)
            .killmail_time(*time)
            .values(100.0, 50.0)
            .build()
            .await?;
    }
    Ok(())
}

/// Tests hourly buckets for a single system.
///
/// Verifies that kills are truncated to the hour, counted, summed, and ordered with the
/// most recent period first.
///
/// Expected: Ok(Vec) with three hourly buckets
#[tokio::test]
async fn buckets_system_kills_by_hour() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .with_killmail_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, jita) = factory::helpers::create_system_with_dependencies(db).await?;
    let at = |h, m| Utc.with_ymd_and_hms(2025, 1, 15, h, m, 0).unwrap();
    seed_kills(db, jita.system_id, &[at(11, 10), at(11, 50), at(10, 5)]).await?;
    seed_kills(
        db,
        jita.system_id,
        &[Utc.with_ymd_and_hms(2025, 1, 14, 23, 30, 0).unwrap()],
    )
    .await?;

    let buckets = KillmailRepository::new(db)
        .get_period_counts(KillScope::System, jita.system_id, Mode::Hour)
        .await?;

    let rows: Vec<_> = buckets.iter().map(|b| (b.period, b.count)).collect();
    assert_eq!(
        rows,
        vec![
            (at(11, 0), 2),
            (at(10, 0), 1),
            (Utc.with_ymd_and_hms(2025, 1, 14, 23, 0, 0).unwrap(), 1),
        ]
    );
    assert_eq!(buckets[0].destroyed_value, 200.0);
    assert_eq!(buckets[0].dropped_value, 100.0);

    Ok(())
}

/// Tests day, week, and month truncation.
///
/// 2025-01-15 is a Wednesday and 2025-01-12 a Sunday, so the two fall into weeks
/// starting on Monday 13 and Monday 6 January.
///
/// Expected: Ok(Vec) with buckets starting at midnight, Monday, and the first of the month
#[tokio::test]
async fn truncates_to_day_week_and_month() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .with_killmail_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, jita) = factory::helpers::create_system_with_dependencies(db).await?;
    let day = |d, h| Utc.with_ymd_and_hms(2025, 1, d, h, 0, 0).unwrap();
    seed_kills(db, jita.system_id, &[day(15, 9), day(15, 1), day(12, 18)]).await?;

    let repo = KillmailRepository::new(db);

    let daily = repo
        .get_period_counts(KillScope::System, jita.system_id, Mode::Day)
        .await?;
    let rows: Vec<_> = daily.iter().map(|b| (b.period, b.count)).collect();
    assert_eq!(rows, vec![(day(15, 0), 2), (day(12, 0), 1)]);

    let weekly = repo
        .get_period_counts(KillScope::System, jita.system_id, Mode::Week)
        .await?;
    let rows: Vec<_> = weekly.iter().map(|b| (b.period, b.count)).collect();
    assert_eq!(rows, vec![(day(13, 0), 2), (day(6, 0), 1)]);

    let monthly = repo
        .get_period_counts(KillScope::System, jita.system_id, Mode::Month)
        .await?;
    let rows: Vec<_> = monthly.iter().map(|b| (b.period, b.count)).collect();
    assert_eq!(rows, vec![(day(1, 0), 3)]);

    Ok(())
}

/// Tests constellation and region scopes.
///
/// Verifies that kills are aggregated across every system of the scope and that kills
/// elsewhere are ignored.
///
/// Expected: Ok(Vec) with one daily bucket per scope
#[tokio::test]
async fn aggregates_across_constellation_and_region() -> Result<(), DbErr> {
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

    let now = fixed_now();
    seed_kills(db, jita.system_id, &[now]).await?;
    seed_kills(db, perimeter.system_id, &[now]).await?;
    seed_kills(db, ikuchi.system_id, &[now]).await?;
    seed_kills(db, amarr.system_id, &[now, now]).await?;

    let repo = KillmailRepository::new(db);

    let constellation = repo
        .get_period_counts(KillScope::Constellation, kimotoro.constellation_id, Mode::Day)
        .await?;
    assert_eq!(constellation.len(), 1);
    assert_eq!(constellation[0].count, 2);

    let region = repo
        .get_period_counts(KillScope::Region, forge.region_id, Mode::Day)
        .await?;
    assert_eq!(region.len(), 1);
    assert_eq!(region[0].count, 3);
    assert_eq!(region[0].destroyed_value, 300.0);

    assert!(repo
        .get_period_counts(KillScope::Region, -1, Mode::Day)
        .await?
        .is_empty());

    Ok(())
}

/// Tests that missing ISK values count as kills but add nothing to the sums.
///
/// Expected: Ok(Vec) with count 2 and only the valued kill summed
#[tokio::test]
async fn treats_missing_values_as_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .with_killmail_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, jita) = factory::helpers::create_system_with_dependencies(db).await?;
    seed_kills(db, jita.system_id, &[fixed_now()]).await?;
    factory::killmail::KillmailFactory::new(db, jita.system_id)
        .killmail_time(fixed_now())
        .without_details()
        .build()
        .await?;

    let buckets = KillmailRepository::new(db)
        .get_period_counts(KillScope::System, jita.system_id, Mode::Day)
        .await?;

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].count, 2);
    assert_eq!(buckets[0].destroyed_value, 100.0);
    assert_eq!(buckets[0].dropped_value, 50.0);

    Ok(())
}
