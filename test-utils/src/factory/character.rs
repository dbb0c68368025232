//! Character factory for creating test combatant entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let character = CharacterFactory::new(&db)
///     .name("Guard")
///     .initiative(15)
///     .owner("123456789")
///     .build()
///     .await?;
/// ```
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    armor_class: i32,
    max_hp: i32,
    current_hp: i32,
    initiative: i32,
    is_active: bool,
    owner_id: Option<String>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {id}"`
    /// - armor_class: 14, max_hp: 20, current_hp: 20, initiative: 10
    /// - is_active: false, owner_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Character {}", id),
            armor_class: 14,
            max_hp: 20,
            current_hp: 20,
            initiative: 10,
            is_active: false,
            owner_id: None,
        }
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the armor class.
    pub fn armor_class(mut self, armor_class: i32) -> Self {
        self.armor_class = armor_class;
        self
    }

    /// Sets maximum hit points; current hit points follow unless set separately.
    pub fn max_hp(mut self, max_hp: i32) -> Self {
        self.max_hp = max_hp;
        self.current_hp = self.current_hp.min(max_hp);
        self
    }

    /// Sets current hit points.
    pub fn current_hp(mut self, current_hp: i32) -> Self {
        self.current_hp = current_hp;
        self
    }

    /// Sets the initiative score.
    pub fn initiative(mut self, initiative: i32) -> Self {
        self.initiative = initiative;
        self
    }

    /// Sets the active-turn flag.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the owning user's Discord id.
    pub fn owner(mut self, discord_id: impl Into<String>) -> Self {
        self.owner_id = Some(discord_id.into());
        self
    }

    /// Builds and inserts the character entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::character::Model)` - Created character entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            armor_class: ActiveValue::Set(self.armor_class),
            max_hp: ActiveValue::Set(self.max_hp),
            current_hp: ActiveValue::Set(self.current_hp),
            initiative: ActiveValue::Set(self.initiative),
            is_active: ActiveValue::Set(self.is_active),
            owner_id: ActiveValue::Set(self.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}

/// Creates a character owned by the given Discord user.
pub async fn create_character_for_owner(
    db: &DatabaseConnection,
    discord_id: impl Into<String>,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).owner(discord_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_character_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Character)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let character = create_character(db).await?;

        assert!(!character.name.is_empty());
        assert_eq!(character.current_hp, character.max_hp);
        assert!(!character.is_active);
        assert!(character.owner_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_character_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Character)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let character = CharacterFactory::new(db)
            .name("Guard")
            .armor_class(16)
            .max_hp(30)
            .current_hp(12)
            .initiative(15)
            .owner("123456789")
            .build()
            .await?;

        assert_eq!(character.name, "Guard");
        assert_eq!(character.armor_class, 16);
        assert_eq!(character.max_hp, 30);
        assert_eq!(character.current_hp, 12);
        assert_eq!(character.initiative, 15);
        assert_eq!(character.owner_id.as_deref(), Some("123456789"));

        Ok(())
    }
}
