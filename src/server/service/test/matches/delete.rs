use super::*;

/// Tests deleting a match and then deleting it again.
///
/// Expected: Ok, then Err(AppError::NotFound)
#[tokio::test]
async fn deletes_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, existing) = factory::helpers::create_match_with_dependencies(db).await?;
    let service = MatchService::new(db);

    service.delete(existing.id).await?;

    assert!(matches!(
        service.delete(existing.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_by_id(existing.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
