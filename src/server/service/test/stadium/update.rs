use super::*;

/// Tests that resubmitting the stored postal code skips the lookup.
///
/// Expected: Ok with no lookup performed
#[tokio::test]
async fn skips_lookup_for_unchanged_postal_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = StubLookup::default();

    let stadium = factory::stadium::StadiumFactory::new(db)
        .address(PAULISTA)
        .build()
        .await?;

    StadiumService::new(db, &lookup)
        .update(UpdateStadiumParams {
            id: stadium.id,
            name: None,
            postal_code: Some(PAULISTA.to_string()),
        })
        .await?;

    assert_eq!(lookup.calls(), 0);

    Ok(())
}

/// Tests moving a stadium to another postal code.
///
/// Expected: Ok with the new address and exactly one lookup
#[tokio::test]
async fn resolves_changed_postal_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = StubLookup::default();

    let stadium = factory::stadium::StadiumFactory::new(db)
        .address(PAULISTA)
        .build()
        .await?;

    let updated = StadiumService::new(db, &lookup)
        .update(UpdateStadiumParams {
            id: stadium.id,
            name: None,
            postal_code: Some(COPACABANA.to_string()),
        })
        .await?;

    assert_eq!(lookup.calls(), 1);
    assert_eq!(updated.address.unwrap().district, "Copacabana");

    Ok(())
}

/// Tests that changing only the letter case of the name is not a conflict.
///
/// Expected: Ok with the recased name
#[tokio::test]
async fn allows_recasing_own_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = StubLookup::default();

    let stadium = factory::stadium::StadiumFactory::new(db)
        .name("arena pantanal")
        .build()
        .await?;

    let updated = StadiumService::new(db, &lookup)
        .update(UpdateStadiumParams {
            id: stadium.id,
            name: Some("Arena Pantanal".to_string()),
            postal_code: None,
        })
        .await?;

    assert_eq!(updated.name, "Arena Pantanal");

    Ok(())
}

/// Tests renaming onto another stadium's name.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_rename_onto_existing_stadium() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = StubLookup::default();

    factory::stadium::StadiumFactory::new(db)
        .name("Castelão")
        .build()
        .await?;
    let stadium = factory::create_stadium(db).await?;

    let result = StadiumService::new(db, &lookup)
        .update(UpdateStadiumParams {
            id: stadium.id,
            name: Some("CASTELÃO".to_string()),
            postal_code: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
