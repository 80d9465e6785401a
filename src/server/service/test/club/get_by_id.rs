use super::*;

/// Tests that inactive clubs are hidden from lookups by ID.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn hides_inactive_club() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::ClubFactory::new(db)
        .active(false)
        .build()
        .await?;

    let result = ClubService::new(db).get_by_id(club.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests looking up an unknown club.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_club() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClubService::new(db).get_by_id(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
