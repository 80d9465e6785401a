use super::*;

/// Tests the head-to-head retrospective from the club's point of view.
///
/// Expected: Ok with one victory and one defeat against the opponent
#[tokio::test]
async fn folds_head_to_head() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let opponent = factory::create_club(db).await?;
    let bystander = factory::create_club(db).await?;

    play(db, club.id, opponent.id, (2, 0), 0).await?;
    play(db, opponent.id, club.id, (1, 0), 3).await?;
    play(db, club.id, bystander.id, (5, 0), 6).await?;

    let row = RetrospectService::new(db)
        .against(club.id, opponent.id, None)
        .await?;

    assert_eq!(row.opponent_name, opponent.name);
    assert_eq!(row.tally.matches, 2);
    assert_eq!((row.tally.victories, row.tally.defeats), (1, 1));
    assert_eq!((row.tally.goals_for, row.tally.goals_against), (2, 1));

    Ok(())
}

/// Tests an opponent the club never faced.
///
/// Expected: Ok with a row of zeros
#[tokio::test]
async fn yields_zero_row_for_new_opponent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let opponent = factory::create_club(db).await?;

    let row = RetrospectService::new(db)
        .against(club.id, opponent.id, Some("away"))
        .await?;

    assert_eq!(row.opponent_id, opponent.id);
    assert_eq!(row.tally, Default::default());

    Ok(())
}

/// Tests an unknown opponent.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_opponent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;

    let result = RetrospectService::new(db).against(club.id, 50, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
