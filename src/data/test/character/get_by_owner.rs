use super::*;

/// Tests that the owner filter only returns that user's characters, in id
/// order.
#[tokio::test]
async fn filters_by_owner_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::character::create_character_for_owner(db, "123").await?;
    let _other = factory::character::create_character_for_owner(db, "456").await?;
    let second = factory::character::create_character_for_owner(db, "123").await?;
    let _unowned = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_by_owner("123").await?;

    let ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that an owner without characters gets an empty list.
#[tokio::test]
async fn unknown_owner_gets_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let characters = repo.get_by_owner("nobody").await?;

    assert!(characters.is_empty());

    Ok(())
}
