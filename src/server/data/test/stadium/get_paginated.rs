use super::*;

/// Tests that inactive stadiums are listed and counted alongside active ones.
///
/// Expected: Ok with both stadiums and a total of 2
#[tokio::test]
async fn lists_every_stadium() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stadiums)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_stadium(db).await?;
    let second = factory::stadium::StadiumFactory::new(db)
        .active(false)
        .build()
        .await?;

    let (stadiums, total) = StadiumRepository::new(db).get_paginated(0, 10).await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = stadiums.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with an empty page and the full total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stadiums)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_stadium(db).await?;

    let (stadiums, total) = StadiumRepository::new(db).get_paginated(3, 10).await?;

    assert_eq!(total, 1);
    assert!(stadiums.is_empty());

    Ok(())
}
