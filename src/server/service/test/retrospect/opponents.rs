use super::*;

/// Tests grouping a club's history by opponent.
///
/// Expected: Ok with one row per opponent in order of first meeting
#[tokio::test]
async fn groups_by_opponent_in_first_meeting_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let met_second = factory::create_club(db).await?;
    let met_first = factory::create_club(db).await?;

    play(db, club.id, met_first.id, (1, 0), 0).await?;
    play(db, met_second.id, club.id, (2, 2), 3).await?;
    play(db, met_first.id, club.id, (3, 0), 6).await?;

    let rows = RetrospectService::new(db).opponents(club.id, None).await?;

    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].opponent_id, met_first.id);
    assert_eq!(rows[0].opponent_name, met_first.name);
    assert_eq!(rows[0].tally.matches, 2);
    assert_eq!((rows[0].tally.victories, rows[0].tally.defeats), (1, 1));

    assert_eq!(rows[1].opponent_id, met_second.id);
    assert_eq!(rows[1].tally.draws, 1);

    Ok(())
}

/// Tests a club that never played.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn is_empty_without_matches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;

    let rows = RetrospectService::new(db)
        .opponents(club.id, Some("home"))
        .await?;

    assert!(rows.is_empty());

    Ok(())
}
