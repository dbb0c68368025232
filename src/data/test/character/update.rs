use super::*;

/// Tests that updating a character rewrites its combat fields.
///
/// Expected: Ok with the new values both returned and persisted
#[tokio::test]
async fn updates_combat_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    let updated = repo
        .update(UpdateCharacterParams {
            id: existing.id,
            name: "Guard Captain".to_string(),
            armor_class: 17,
            max_hp: 40,
            current_hp: 33,
            initiative: 18,
            is_active: true,
        })
        .await?;

    assert_eq!(updated.name, "Guard Captain");
    assert_eq!(updated.armor_class, 17);
    assert!(updated.is_active);

    let stored = repo.get_by_id(existing.id).await?.unwrap();
    assert_eq!(stored.current_hp, 33);
    assert_eq!(stored.initiative, 18);

    Ok(())
}

/// Tests that updates never touch the owner column.
#[tokio::test]
async fn update_leaves_owner_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::character::create_character_for_owner(db, "123").await?;

    let repo = CharacterRepository::new(db);
    let updated = repo
        .update(UpdateCharacterParams {
            id: existing.id,
            name: existing.name.clone(),
            armor_class: existing.armor_class,
            max_hp: existing.max_hp,
            current_hp: 1,
            initiative: existing.initiative,
            is_active: false,
        })
        .await?;

    assert_eq!(updated.owner_id.as_deref(), Some("123"));

    Ok(())
}
