//! Character data repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, Unchanged,
};

use crate::model::character::{Character, CreateCharacterParams, UpdateCharacterParams};

/// Repository providing database operations for combatants.
pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every character in the store, in id order.
    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Finds a single character by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Gets every character owned by the given Discord user, in id order.
    pub async fn get_by_owner(&self, discord_id: &str) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .filter(entity::character::Column::OwnerId.eq(discord_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Gets the members of an encounter, in id order.
    pub async fn get_by_encounter(&self, encounter_id: i32) -> Result<Vec<Character>, DbErr> {
        self.get_members(encounter_id, None).await
    }

    /// Gets the members of an encounter that are owned by the given user.
    pub async fn get_by_encounter_and_owner(
        &self,
        encounter_id: i32,
        discord_id: &str,
    ) -> Result<Vec<Character>, DbErr> {
        self.get_members(encounter_id, Some(discord_id)).await
    }

    async fn get_members(
        &self,
        encounter_id: i32,
        discord_id: Option<&str>,
    ) -> Result<Vec<Character>, DbErr> {
        let member_ids: Vec<i32> = entity::prelude::EncounterCharacter::find()
            .filter(entity::encounter_character::Column::EncounterId.eq(encounter_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| m.character_id)
            .collect();

        if member_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::Character::find()
            .filter(entity::character::Column::Id.is_in(member_ids));

        if let Some(discord_id) = discord_id {
            query = query.filter(entity::character::Column::OwnerId.eq(discord_id));
        }

        let entities = query
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Inserts a new character row and returns it with the store-assigned id.
    ///
    /// New characters are never active; the active flag only changes through
    /// the turn-order session.
    pub async fn create(&self, param: CreateCharacterParams) -> Result<Character, DbErr> {
        let entity = entity::character::ActiveModel {
            name: Set(param.name),
            armor_class: Set(param.armor_class),
            max_hp: Set(param.max_hp),
            current_hp: Set(param.current_hp),
            initiative: Set(param.initiative),
            is_active: Set(false),
            owner_id: Set(param.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Character::from_entity(entity))
    }

    /// Updates an existing character row.
    ///
    /// The owner column is not part of the update; ownership is fixed at
    /// creation time.
    pub async fn update(&self, param: UpdateCharacterParams) -> Result<Character, DbErr> {
        let entity = entity::character::ActiveModel {
            id: Unchanged(param.id),
            name: Set(param.name),
            armor_class: Set(param.armor_class),
            max_hp: Set(param.max_hp),
            current_hp: Set(param.current_hp),
            initiative: Set(param.initiative),
            is_active: Set(param.is_active),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Character::from_entity(entity))
    }

    /// Deletes a character row.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No character with that id existed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Character::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
