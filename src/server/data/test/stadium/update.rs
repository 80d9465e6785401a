use super::*;

/// Tests that an update without a name keeps the stored one.
///
/// Expected: Ok with the original name and the new address
#[tokio::test]
async fn keeps_name_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stadiums)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stadium = factory::stadium::StadiumFactory::new(db)
        .name("Arena da Baixada")
        .build()
        .await?;

    let updated = StadiumRepository::new(db)
        .update(stadium.id, None, Some(paulista()))
        .await?;

    assert_eq!(updated.name, "Arena da Baixada");
    assert_eq!(updated.address, Some(paulista()));

    Ok(())
}

/// Tests that an update without an address keeps the stored one.
///
/// Expected: Ok with the new name and the original address
#[tokio::test]
async fn keeps_address_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stadiums)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StadiumRepository::new(db);
    let stadium = repo.create("Morumbi".to_string(), paulista()).await?;

    let updated = repo
        .update(stadium.id, Some("Morumbis".to_string()), None)
        .await?;

    assert_eq!(updated.name, "Morumbis");
    assert_eq!(updated.address, Some(paulista()));

    Ok(())
}

/// Tests soft-deleting a stadium.
///
/// Expected: Ok with an inactive stadium
#[tokio::test]
async fn deactivates_stadium() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stadiums)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stadium = factory::create_stadium(db).await?;

    let updated = StadiumRepository::new(db)
        .set_active(stadium.id, false)
        .await?;

    assert!(!updated.is_active());

    Ok(())
}
