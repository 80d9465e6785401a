use super::*;

/// Tests creating a match and reading it back by ID.
///
/// Expected: Ok with a match equal to the created one
#[tokio::test]
async fn creates_and_reads_back_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::create_club(db).await?;
    let away = factory::create_club(db).await?;
    let stadium = factory::create_stadium(db).await?;

    let repo = MatchRepository::new(db);
    let created = repo
        .create(MatchParams {
            home_club_id: home.id,
            away_club_id: away.id,
            stadium_id: stadium.id,
            kickoff: fixture::matches::default_kickoff(),
            home_goals: 3,
            away_goals: 1,
        })
        .await?;

    assert_eq!(created.home_goals, 3);
    assert_eq!(created.away_goals, 1);
    assert_eq!(created.kickoff, fixture::matches::default_kickoff());

    let fetched = repo.find_by_id(created.id).await?;
    assert_eq!(fetched, Some(created));

    Ok(())
}
