use super::*;

/// Tests that only matches between the two clubs are returned.
///
/// Expected: Ok with the head-to-head matches and without the third-party one
#[tokio::test]
async fn returns_head_to_head_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let rival = factory::create_club(db).await?;
    let other = factory::create_club(db).await?;
    let stadium = factory::create_stadium(db).await?;
    let kickoff = fixture::matches::default_kickoff();

    let first = factory::matches::MatchFactory::new(db, club.id, rival.id, stadium.id)
        .kickoff(kickoff)
        .build()
        .await?;
    let second = factory::matches::MatchFactory::new(db, rival.id, club.id, stadium.id)
        .kickoff(kickoff + Duration::days(7))
        .build()
        .await?;
    factory::matches::MatchFactory::new(db, club.id, other.id, stadium.id)
        .kickoff(kickoff + Duration::days(14))
        .build()
        .await?;

    let repo = MatchRepository::new(db);

    let ids: Vec<i32> = repo
        .between_clubs(club.id, rival.id, None)
        .await?
        .iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);

    let away: Vec<i32> = repo
        .between_clubs(club.id, rival.id, Some(Side::Away))
        .await?
        .iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(away, vec![second.id]);

    Ok(())
}
