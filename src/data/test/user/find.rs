use super::*;

/// Tests lookup by primary key.
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(found.discord_id, created.discord_id);

    Ok(())
}

/// Tests lookup by Discord id, including the missing case.
#[tokio::test]
async fn finds_user_by_discord_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .discord_id("987654321")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_discord_id("987654321").await?.unwrap();
    assert_eq!(found.id, created.id);

    assert!(repo.find_by_discord_id("missing").await?.is_none());

    Ok(())
}
