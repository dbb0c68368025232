use super::*;

/// Tests that only members of the encounter are returned.
#[tokio::test]
async fn returns_members_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let encounter = factory::create_encounter(db, "123").await?;
    let member = factory::create_character(db).await?;
    let _outsider = factory::create_character(db).await?;
    factory::add_member(db, encounter.id, member.id).await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_by_encounter(encounter.id).await?;

    let ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![member.id]);

    Ok(())
}

/// Tests that the owner-filtered variant drops members owned by others.
#[tokio::test]
async fn owner_variant_drops_foreign_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let encounter = factory::create_encounter(db, "123").await?;
    let mine = factory::character::create_character_for_owner(db, "123").await?;
    let theirs = factory::character::create_character_for_owner(db, "456").await?;
    factory::add_member(db, encounter.id, mine.id).await?;
    factory::add_member(db, encounter.id, theirs.id).await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_by_encounter_and_owner(encounter.id, "123").await?;

    let ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![mine.id]);

    Ok(())
}

/// Tests that an encounter without members yields an empty list.
#[tokio::test]
async fn empty_encounter_yields_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let encounter = factory::create_encounter(db, "123").await?;
    let _loose = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_by_encounter(encounter.id).await?;

    assert!(characters.is_empty());

    Ok(())
}
