use super::*;

/// Tests the rest-window query with exclusive bounds.
///
/// A match exactly at a bound is left out, a match inside is returned whether the club
/// played home or away.
///
/// Expected: Ok with only the match inside the window
#[tokio::test]
async fn returns_matches_strictly_inside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let rival = factory::create_club(db).await?;
    let stadium = factory::create_stadium(db).await?;
    let center = Utc.with_ymd_and_hms(2024, 6, 10, 20, 0, 0).unwrap();

    let inside = factory::matches::MatchFactory::new(db, rival.id, club.id, stadium.id)
        .kickoff(center - Duration::hours(47))
        .build()
        .await?;
    factory::matches::MatchFactory::new(db, club.id, rival.id, stadium.id)
        .kickoff(center + Duration::hours(48))
        .build()
        .await?;

    let found = MatchRepository::new(db)
        .for_clubs_between(
            &[club.id],
            center - Duration::hours(48),
            center + Duration::hours(48),
            None,
        )
        .await?;

    let ids: Vec<i32> = found.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![inside.id]);

    Ok(())
}

/// Tests that the match being updated is skipped.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn skips_excluded_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (home, away, _, existing) =
        factory::helpers::create_match_with_dependencies(db).await?;
    let kickoff = fixture::matches::default_kickoff();

    let found = MatchRepository::new(db)
        .for_clubs_between(
            &[home.id, away.id],
            kickoff - Duration::hours(48),
            kickoff + Duration::hours(48),
            Some(existing.id),
        )
        .await?;

    assert!(found.is_empty());

    Ok(())
}
