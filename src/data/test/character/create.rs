use super::*;

fn params(name: &str, owner_id: Option<&str>) -> CreateCharacterParams {
    CreateCharacterParams {
        name: name.to_string(),
        armor_class: 15,
        max_hp: 30,
        current_hp: 25,
        initiative: 12,
        owner_id: owner_id.map(str::to_string),
    }
}

/// Tests that creating a character returns the row with its store-assigned
/// id and all fields intact.
///
/// Expected: Ok with id > 0 and the provided field values
#[tokio::test]
async fn creates_character_with_store_assigned_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo.create(params("Guard", Some("123"))).await?;

    assert!(character.id > 0);
    assert_eq!(character.name, "Guard");
    assert_eq!(character.armor_class, 15);
    assert_eq!(character.max_hp, 30);
    assert_eq!(character.current_hp, 25);
    assert_eq!(character.initiative, 12);
    assert_eq!(character.owner_id.as_deref(), Some("123"));

    Ok(())
}

/// Tests that new characters never start with the active-turn flag set.
#[tokio::test]
async fn new_characters_start_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo.create(params("Guard", None)).await?;

    assert!(!character.is_active);
    assert!(character.owner_id.is_none());

    Ok(())
}
