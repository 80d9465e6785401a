use super::*;

/// Tests creating a club.
///
/// Verifies that the repository stores the club as active and returns it with the
/// generated ID, so that a later lookup by ID yields the same record.
///
/// Expected: Ok with the created club
#[tokio::test]
async fn creates_active_club() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Clubs)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClubRepository::new(db);
    let created = repo
        .create(CreateClubParams {
            name: "Botafogo".to_string(),
            state: StateCode::Rj,
            founded_at: NaiveDate::from_ymd_opt(1904, 8, 12).unwrap(),
        })
        .await?;

    assert!(created.is_active());
    assert_eq!(created.state, StateCode::Rj);

    let fetched = repo.find_by_id(created.id).await?;
    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Tests looking up a club that was never created.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_club() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Clubs)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClubRepository::new(db).find_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}
