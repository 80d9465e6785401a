use super::*;

/// Tests that deleting twice reports the club as already inactive.
///
/// Expected: Ok on the first delete, Err(AppError::Conflict) on the second
#[tokio::test]
async fn rejects_second_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let service = ClubService::new(db);

    service.delete(club.id).await?;
    let result = service.delete(club.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that a soft-deleted club still shows up in an inactive-only search.
///
/// Expected: Ok with the deleted club listed as inactive
#[tokio::test]
async fn keeps_record_after_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let service = ClubService::new(db);
    service.delete(club.id).await?;

    let page = service
        .search(
            ClubFilter {
                active: Some(false),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.clubs[0].id, club.id);

    Ok(())
}
