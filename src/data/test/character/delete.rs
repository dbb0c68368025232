use super::*;

/// Tests that deleting an existing character removes the row.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    let deleted = repo.delete(existing.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(existing.id).await?.is_none());

    Ok(())
}

/// Tests that deleting an unknown id reports that nothing happened.
#[tokio::test]
async fn delete_of_unknown_id_reports_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert!(!deleted);

    Ok(())
}
