use super::*;

/// Tests the stadium-day query with a half-open range.
///
/// Expected: Ok with the match at midnight and without the one at the next midnight
#[tokio::test]
async fn returns_matches_in_half_open_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_club(db).await?;
    let away = factory::create_club(db).await?;
    let stadium = factory::create_stadium(db).await?;
    let day = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();

    let at_start = factory::matches::MatchFactory::new(db, home.id, away.id, stadium.id)
        .kickoff(day)
        .build()
        .await?;
    factory::matches::MatchFactory::new(db, away.id, home.id, stadium.id)
        .kickoff(day + Duration::days(1))
        .build()
        .await?;

    let found = MatchRepository::new(db)
        .for_stadium_between(stadium.id, day, day + Duration::days(1), None)
        .await?;

    let ids: Vec<i32> = found.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![at_start.id]);

    Ok(())
}

/// Tests that matches at other stadiums are ignored.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn ignores_other_stadiums() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_match_with_dependencies(db).await?;
    let empty = factory::create_stadium(db).await?;
    let day = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();

    let found = MatchRepository::new(db)
        .for_stadium_between(empty.id, day, day + Duration::days(1), None)
        .await?;

    assert!(found.is_empty());

    Ok(())
}
