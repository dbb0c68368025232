use super::*;

fn params(discord_id: &str, name: &str, avatar: Option<&str>) -> UpsertUserParams {
    UpsertUserParams {
        discord_id: discord_id.to_string(),
        name: name.to_string(),
        avatar: avatar.map(str::to_string),
    }
}

/// Tests that upserting an unknown Discord id inserts a new user.
#[tokio::test]
async fn inserts_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert(params("123", "Autumn", Some("a1b2"))).await?;

    assert!(user.id > 0);
    assert_eq!(user.discord_id, "123");
    assert_eq!(user.name, "Autumn");
    assert_eq!(user.avatar.as_deref(), Some("a1b2"));

    Ok(())
}

/// Tests that upserting an existing Discord id refreshes the profile but
/// keeps the same row.
#[tokio::test]
async fn refreshes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let original = repo.upsert(params("123", "Autumn", None)).await?;
    let updated = repo.upsert(params("123", "Autumn Order", Some("c3d4"))).await?;

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.name, "Autumn Order");
    assert_eq!(updated.avatar.as_deref(), Some("c3d4"));

    Ok(())
}
