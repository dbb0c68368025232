//! Encounter data repository, including membership management.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::model::encounter::Encounter;

/// Repository providing database operations for encounters and the
/// encounter/character membership set.
pub struct EncounterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EncounterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every encounter in the store, in id order.
    pub async fn get_all(&self) -> Result<Vec<Encounter>, DbErr> {
        let entities = entity::prelude::Encounter::find()
            .order_by_asc(entity::encounter::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Encounter::from_entity).collect())
    }

    /// Gets every encounter owned by the given Discord user, in id order.
    pub async fn get_by_owner(&self, discord_id: &str) -> Result<Vec<Encounter>, DbErr> {
        let entities = entity::prelude::Encounter::find()
            .filter(entity::encounter::Column::OwnerId.eq(discord_id))
            .order_by_asc(entity::encounter::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Encounter::from_entity).collect())
    }

    /// Finds a single encounter by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Encounter>, DbErr> {
        let entity = entity::prelude::Encounter::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Encounter::from_entity))
    }

    /// Adds a character to an encounter's membership set.
    ///
    /// Adding an existing member is a no-op rather than a constraint error.
    pub async fn add_character(&self, encounter_id: i32, character_id: i32) -> Result<(), DbErr> {
        entity::prelude::EncounterCharacter::insert(entity::encounter_character::ActiveModel {
            encounter_id: Set(encounter_id),
            character_id: Set(character_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::encounter_character::Column::EncounterId,
                entity::encounter_character::Column::CharacterId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Removes a character from an encounter's membership set.
    pub async fn remove_character(
        &self,
        encounter_id: i32,
        character_id: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::EncounterCharacter::delete_many()
            .filter(entity::encounter_character::Column::EncounterId.eq(encounter_id))
            .filter(entity::encounter_character::Column::CharacterId.eq(character_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the ids of every character in an encounter.
    pub async fn member_ids(&self, encounter_id: i32) -> Result<Vec<i32>, DbErr> {
        let memberships = entity::prelude::EncounterCharacter::find()
            .filter(entity::encounter_character::Column::EncounterId.eq(encounter_id))
            .all(self.db)
            .await?;

        Ok(memberships.into_iter().map(|m| m.character_id).collect())
    }
}
