use super::*;

/// Tests soft-deleting a stadium and deleting it again.
///
/// Expected: the stadium disappears from `get_by_id`, the second delete conflicts
#[tokio::test]
async fn deactivates_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = StubLookup::default();

    let stadium = factory::create_stadium(db).await?;
    let service = StadiumService::new(db, &lookup);

    service.delete(stadium.id).await?;

    assert!(matches!(
        service.get_by_id(stadium.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(stadium.id).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests deleting an unknown stadium.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_stadium() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let lookup = StubLookup::default();

    let result = StadiumService::new(db, &lookup).delete(31).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
