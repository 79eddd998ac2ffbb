use super::*;

/// Tests that recent killmails are newest first and capped at the limit.
///
/// Expected: Ok(Vec) of `limit` killmails ordered by time descending
#[tokio::test]
async fn returns_newest_killmails_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .with_killmail_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, jita) = factory::helpers::create_system_with_dependencies(db).await?;
    let (_, _, amarr) = factory::helpers::create_system_with_dependencies(db).await?;
    let now = fixed_now();

    for minutes in 0..20 {
        factory::create_killmail(db, jita.system_id, now - Duration::minutes(minutes)).await?;
    }
    factory::create_killmail(db, amarr.system_id, now + Duration::minutes(1)).await?;

    let killmails = KillmailRepository::new(db)
        .get_recent_by_system(jita.system_id, 15)
        .await?;

    assert_eq!(killmails.len(), 15);
    assert_eq!(killmails[0].killmail_time, now);
    assert!(killmails
        .windows(2)
        .all(|pair| pair[0].killmail_time >= pair[1].killmail_time));
    assert!(killmails
        .iter()
        .all(|k| k.solar_system_id == jita.system_id));

    Ok(())
}

/// Tests that null killmail columns come back as zero values.
///
/// Expected: Ok(Vec) with empty hash and zero ISK values
#[tokio::test]
async fn substitutes_defaults_for_missing_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .with_killmail_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, jita) = factory::helpers::create_system_with_dependencies(db).await?;
    factory::killmail::KillmailFactory::new(db, jita.system_id)
        .killmail_time(fixed_now())
        .without_details()
        .build()
        .await?;

    let killmails = KillmailRepository::new(db)
        .get_recent_by_system(jita.system_id, 15)
        .await?;

    assert_eq!(killmails.len(), 1);
    assert_eq!(killmails[0].killmail_hash, "");
    assert_eq!(killmails[0].destroyed_value, 0.0);
    assert_eq!(killmails[0].total_value, 0.0);
    assert_eq!(killmails[0].kill_ship, 0);

    Ok(())
}
