use super::*;

/// Tests that adding a character creates the membership row.
#[tokio::test]
async fn adds_character_to_encounter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let encounter = factory::create_encounter(db, "123").await?;
    let character = factory::create_character(db).await?;

    let repo = EncounterRepository::new(db);
    repo.add_character(encounter.id, character.id).await?;

    assert_eq!(repo.member_ids(encounter.id).await?, vec![character.id]);

    Ok(())
}

/// Tests that adding an existing member twice is a no-op rather than a
/// constraint error.
#[tokio::test]
async fn duplicate_add_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let encounter = factory::create_encounter(db, "123").await?;
    let character = factory::create_character(db).await?;

    let repo = EncounterRepository::new(db);
    repo.add_character(encounter.id, character.id).await?;
    repo.add_character(encounter.id, character.id).await?;

    assert_eq!(repo.member_ids(encounter.id).await?.len(), 1);

    Ok(())
}

/// Tests that removing a character deletes only that membership row.
#[tokio::test]
async fn removes_character_from_encounter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let encounter = factory::create_encounter(db, "123").await?;
    let staying = factory::create_character(db).await?;
    let leaving = factory::create_character(db).await?;

    let repo = EncounterRepository::new(db);
    repo.add_character(encounter.id, staying.id).await?;
    repo.add_character(encounter.id, leaving.id).await?;

    repo.remove_character(encounter.id, leaving.id).await?;

    assert_eq!(repo.member_ids(encounter.id).await?, vec![staying.id]);

    Ok(())
}
