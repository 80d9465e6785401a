use super::*;

/// Tests ranking by points over stored matches.
///
/// The leader won twice and drew once; the club that never played is left out.
///
/// Expected: Ok with the leader first on 7 points
#[tokio::test]
async fn ranks_by_points() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let leader = factory::create_club(db).await?;
    let trailer = factory::create_club(db).await?;
    factory::create_club(db).await?;
    let stadium = factory::create_stadium(db).await?;

    for (days, (h, a)) in [(0, (2, 0)), (3, (1, 1)), (6, (3, 2))] {
        factory::matches::MatchFactory::new(db, leader.id, trailer.id, stadium.id)
            .kickoff(fixture::matches::default_kickoff() + Duration::days(days))
            .score(h, a)
            .build()
            .await?;
    }

    let rows = RankingService::new(db).ranking("PONTOS").await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].club_id, leader.id);
    assert_eq!(rows[0].points, 7);
    assert_eq!(rows[1].club_id, trailer.id);
    assert_eq!(rows[1].points, 1);

    Ok(())
}

/// Tests that ranking by matches lists every club that played.
///
/// Expected: Ok with both clubs on 1 match, in club order
#[tokio::test]
async fn keeps_club_order_on_ties() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (home, away, _, _) = factory::helpers::create_match_with_dependencies(db).await?;

    let rows = RankingService::new(db).ranking("matches").await?;

    let ids: Vec<i32> = rows.iter().map(|r| r.club_id).collect();
    assert_eq!(ids, vec![home.id, away.id]);

    Ok(())
}

/// Tests an unknown metric keyword.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RankingService::new(db).ranking("assists").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests ranking by goals when stored totals exceed the `u32` range.
///
/// Expected: Ok with the goal total saturated at `u32::MAX`
#[tokio::test]
async fn saturates_large_goal_totals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_club(db).await?;
    let away = factory::create_club(db).await?;
    let stadium = factory::create_stadium(db).await?;

    for days in [0, 3, 6] {
        factory::matches::MatchFactory::new(db, home.id, away.id, stadium.id)
            .kickoff(fixture::matches::default_kickoff() + Duration::days(days))
            .score(i32::MAX, 0)
            .build()
            .await?;
    }

    let rows = RankingService::new(db).ranking("goals").await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].club_id, home.id);
    assert_eq!(rows[0].goals, u32::MAX);

    Ok(())
}
