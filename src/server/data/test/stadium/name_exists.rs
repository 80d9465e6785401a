use super::*;

/// Tests that stadium names collide regardless of letter case, accents included.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_name_in_other_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stadiums)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::stadium::StadiumFactory::new(db)
        .name("Estádio do Maracanã")
        .build()
        .await?;

    let exists = StadiumRepository::new(db)
        .name_exists("ESTÁDIO DO MARACANÃ", None)
        .await?;

    assert!(exists);

    Ok(())
}

/// Tests that a stadium does not collide with its own name.
///
/// Expected: Ok(false)
#[tokio::test]
async fn excludes_given_stadium() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stadiums)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stadium = factory::stadium::StadiumFactory::new(db)
        .name("Mineirão")
        .build()
        .await?;

    let exists = StadiumRepository::new(db)
        .name_exists("mineirão", Some(stadium.id))
        .await?;

    assert!(!exists);

    Ok(())
}
