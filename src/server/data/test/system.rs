use super::*;

/// Tests that systems carry the region of their constellation.
///
/// Expected: Ok(Some(System)) with `region_id` resolved through the join
#[tokio::test]
async fn resolves_region_through_constellation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (region, constellation, system) =
        factory::helpers::create_system_with_dependencies(db).await?;

    let found = SystemRepository::new(db)
        .get_by_id(system.system_id)
        .await?
        .unwrap();

    assert_eq!(found.constellation_id, constellation.constellation_id);
    assert_eq!(found.region_id, region.region_id);

    Ok(())
}

/// Tests the combined ID-or-constellation lookup.
///
/// Expected: Ok(Vec) holding the system for a system ID and all members for a
/// constellation ID
#[tokio::test]
async fn matches_either_system_or_constellation_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::create_region(db).await?;
    let constellation = factory::create_constellation(db, region.region_id).await?;
    let jita = factory::system::SystemFactory::new(db, constellation.constellation_id)
        .name("Jita")
        .build()
        .await?;
    factory::system::SystemFactory::new(db, constellation.constellation_id)
        .name("Perimeter")
        .build()
        .await?;

    let repo = SystemRepository::new(db);

    let single = repo.get_by_id_or_constellation(jita.system_id).await?;
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].name, "Jita");

    let members = repo
        .get_by_id_or_constellation(constellation.constellation_id)
        .await?;
    let names: Vec<_> = members.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Jita", "Perimeter"]);

    Ok(())
}

/// Tests listing systems by region.
///
/// Verifies that systems from every constellation of the region are returned and
/// systems of other regions are not.
///
/// Expected: Ok(Vec) with the region's systems ordered by name
#[tokio::test]
async fn lists_systems_of_region() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let forge = factory::create_region(db).await?;
    let kimotoro = factory::create_constellation(db, forge.region_id).await?;
    let otsela = factory::create_constellation(db, forge.region_id).await?;
    factory::system::SystemFactory::new(db, kimotoro.constellation_id)
        .name("Jita")
        .build()
        .await?;
    factory::system::SystemFactory::new(db, otsela.constellation_id)
        .name("Ikuchi")
        .build()
        .await?;
    factory::helpers::create_system_with_dependencies(db).await?;

    let repo = SystemRepository::new(db);

    let systems = repo.get_by_region(forge.region_id).await?;
    let names: Vec<_> = systems.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Ikuchi", "Jita"]);
    assert!(systems.iter().all(|s| s.region_id == forge.region_id));

    assert_eq!(
        repo.get_by_constellation(kimotoro.constellation_id)
            .await?
            .len(),
        1
    );
    assert_eq!(repo.get_all().await?.len(), 3);
    assert!(repo.get_by_name("Jita").await?.is_some());
    assert!(repo.get_by_name("Amarr").await?.is_none());

    Ok(())
}
