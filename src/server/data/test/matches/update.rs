use super::*;

/// Tests that an update rewrites every field of the match.
///
/// Expected: Ok with swapped clubs, new stadium, kickoff and score
#[tokio::test]
async fn rewrites_every_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (home, away, _, existing) =
        factory::helpers::create_match_with_dependencies(db).await?;
    let other_stadium = factory::create_stadium(db).await?;
    let kickoff = fixture::matches::default_kickoff() - Duration::days(10);

    let updated = MatchRepository::new(db)
        .update(
            existing.id,
            MatchParams {
                home_club_id: away.id,
                away_club_id: home.id,
                stadium_id: other_stadium.id,
                kickoff,
                home_goals: 2,
                away_goals: 2,
            },
        )
        .await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.home_club_id, away.id);
    assert_eq!(updated.away_club_id, home.id);
    assert_eq!(updated.stadium_id, other_stadium.id);
    assert_eq!(updated.kickoff, kickoff);
    assert_eq!((updated.home_goals, updated.away_goals), (2, 2));

    Ok(())
}
