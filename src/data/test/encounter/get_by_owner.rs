use super::*;

/// Tests that only the user's encounters are returned, in id order.
#[tokio::test]
async fn filters_by_owner_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_encounter(db, "123").await?;
    let _other = factory::create_encounter(db, "456").await?;
    let second = factory::create_encounter(db, "123").await?;

    let repo = EncounterRepository::new(db);
    let encounters = repo.get_by_owner("123").await?;

    let ids: Vec<i32> = encounters.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that encounter fields survive the round trip through the
/// repository.
#[tokio::test]
async fn returns_full_encounter_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::encounter::EncounterFactory::new(db, "123")
        .name("Ambush")
        .description("Goblins in the *trees*")
        .encounter_type("ambush")
        .campaign_id(7)
        .build()
        .await?;

    let repo = EncounterRepository::new(db);
    let encounter = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(encounter.name, "Ambush");
    assert_eq!(encounter.description, "Goblins in the *trees*");
    assert_eq!(encounter.encounter_type, "ambush");
    assert_eq!(encounter.campaign_id, Some(7));

    Ok(())
}
