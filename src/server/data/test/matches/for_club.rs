use super::*;

/// Tests restricting a club's history to one side.
///
/// Expected: Ok with one match per side and both without a side filter
#[tokio::test]
async fn filters_by_side() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let rival = factory::create_club(db).await?;
    let stadium = factory::create_stadium(db).await?;
    let kickoff = fixture::matches::default_kickoff();

    let at_home = factory::matches::MatchFactory::new(db, club.id, rival.id, stadium.id)
        .kickoff(kickoff)
        .build()
        .await?;
    let away = factory::matches::MatchFactory::new(db, rival.id, club.id, stadium.id)
        .kickoff(kickoff + Duration::days(7))
        .build()
        .await?;

    let repo = MatchRepository::new(db);

    let home_only = repo.for_club(club.id, Some(Side::Home)).await?;
    assert_eq!(home_only.len(), 1);
    assert_eq!(home_only[0].id, at_home.id);

    let away_only = repo.for_club(club.id, Some(Side::Away)).await?;
    assert_eq!(away_only.len(), 1);
    assert_eq!(away_only[0].id, away.id);

    let all: Vec<i32> = repo.for_club(club.id, None).await?.iter().map(|m| m.id).collect();
    assert_eq!(all, vec![at_home.id, away.id]);

    Ok(())
}

/// Tests that history comes back in kickoff order, not insertion order.
///
/// Expected: Ok with the earlier kickoff first
#[tokio::test]
async fn orders_by_kickoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let rival = factory::create_club(db).await?;
    let stadium = factory::create_stadium(db).await?;
    let kickoff = fixture::matches::default_kickoff();

    let later = factory::matches::MatchFactory::new(db, club.id, rival.id, stadium.id)
        .kickoff(kickoff)
        .build()
        .await?;
    let earlier = factory::matches::MatchFactory::new(db, rival.id, club.id, stadium.id)
        .kickoff(kickoff - Duration::days(30))
        .build()
        .await?;

    let ids: Vec<i32> = MatchRepository::new(db)
        .for_club(club.id, None)
        .await?
        .iter()
        .map(|m| m.id)
        .collect();

    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}
