//! Encounter factory and membership helpers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Factory for creating test encounters with customizable fields.
pub struct EncounterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    owner_id: String,
    description: String,
    encounter_type: String,
    campaign_id: Option<i32>,
}

impl<'a> EncounterFactory<'a> {
    /// Creates a new EncounterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Encounter {id}"`
    /// - owner_id: the given Discord id
    /// - description: empty, encounter_type: `"battle"`, campaign_id: `None`
    pub fn new(db: &'a DatabaseConnection, owner_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Encounter {}", id),
            owner_id: owner_id.into(),
            description: String::new(),
            encounter_type: "battle".to_string(),
            campaign_id: None,
        }
    }

    /// Sets the encounter name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the free-text description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the encounter type tag.
    pub fn encounter_type(mut self, encounter_type: impl Into<String>) -> Self {
        self.encounter_type = encounter_type.into();
        self
    }

    /// Sets the campaign grouping id.
    pub fn campaign_id(mut self, campaign_id: i32) -> Self {
        self.campaign_id = Some(campaign_id);
        self
    }

    /// Builds and inserts the encounter entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::encounter::Model)` - Created encounter entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::encounter::Model, DbErr> {
        let now = Utc::now();
        entity::encounter::ActiveModel {
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            encounter_type: ActiveValue::Set(self.encounter_type),
            campaign_id: ActiveValue::Set(self.campaign_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an encounter with default values owned by the given Discord user.
pub async fn create_encounter(
    db: &DatabaseConnection,
    owner_id: impl Into<String>,
) -> Result<entity::encounter::Model, DbErr> {
    EncounterFactory::new(db, owner_id).build().await
}

/// Adds a character to an encounter's membership set.
pub async fn add_member(
    db: &DatabaseConnection,
    encounter_id: i32,
    character_id: i32,
) -> Result<(), DbErr> {
    entity::prelude::EncounterCharacter::insert(entity::encounter_character::ActiveModel {
        encounter_id: ActiveValue::Set(encounter_id),
        character_id: ActiveValue::Set(character_id),
    })
    .exec_without_returning(db)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory;
    use entity::prelude::*;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn creates_encounter_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_tracker_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let encounter = create_encounter(db, "123").await?;

        assert!(!encounter.name.is_empty());
        assert_eq!(encounter.owner_id, "123");
        assert_eq!(encounter.encounter_type, "battle");
        assert!(encounter.campaign_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn adds_member_row() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_tracker_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let encounter = create_encounter(db, "123").await?;
        let character = factory::character::create_character(db).await?;

        add_member(db, encounter.id, character.id).await?;

        let membership = EncounterCharacter::find_by_id((encounter.id, character.id))
            .one(db)
            .await?;
        assert!(membership.is_some());

        Ok(())
    }
}
