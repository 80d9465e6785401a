use super::*;

/// Tests the retrospective of a club with a win, a draw and a loss.
///
/// 3-1 at home, 1-1 away and 0-2 away.
///
/// Expected: Ok with 3 matches, 1 victory, 1 draw, 1 defeat, 4 goals for and 4 against
#[tokio::test]
async fn folds_mixed_history() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::ClubFactory::new(db)
        .name("Cruzeiro")
        .build()
        .await?;
    let first = factory::create_club(db).await?;
    let second = factory::create_club(db).await?;

    play(db, club.id, first.id, (3, 1), 0).await?;
    play(db, first.id, club.id, (1, 1), 3).await?;
    play(db, second.id, club.id, (2, 0), 6).await?;

    let retrospect = RetrospectService::new(db).club(club.id, None).await?;

    assert_eq!(retrospect.club_name, "Cruzeiro");
    let tally = retrospect.tally;
    assert_eq!(tally.matches, 3);
    assert_eq!((tally.victories, tally.draws, tally.defeats), (1, 1, 1));
    assert_eq!((tally.goals_for, tally.goals_against), (4, 4));

    Ok(())
}

/// Tests restricting the retrospective to away matches with a Portuguese keyword.
///
/// Expected: Ok with only the two away matches counted
#[tokio::test]
async fn restricts_to_side() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let rival = factory::create_club(db).await?;

    play(db, club.id, rival.id, (3, 1), 0).await?;
    play(db, rival.id, club.id, (1, 1), 3).await?;
    play(db, rival.id, club.id, (2, 0), 6).await?;

    let tally = RetrospectService::new(db)
        .club(club.id, Some("Fora"))
        .await?
        .tally;

    assert_eq!(tally.matches, 2);
    assert_eq!(tally.victories, 0);
    assert_eq!((tally.goals_for, tally.goals_against), (1, 3));

    Ok(())
}

/// Tests that asking twice yields the same totals.
///
/// Expected: Ok with equal tallies
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let rival = factory::create_club(db).await?;
    play(db, club.id, rival.id, (2, 2), 0).await?;

    let service = RetrospectService::new(db);
    let first = service.club(club.id, None).await?;
    let second = service.club(club.id, None).await?;

    assert_eq!(first.tally, second.tally);

    Ok(())
}

/// Tests an unknown side keyword.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_invalid_side() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;

    let result = RetrospectService::new(db)
        .club(club.id, Some("middle"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests an unknown club, which is reported before the side is looked at.
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

    let result = RetrospectService::new(db).club(8, Some("middle")).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
