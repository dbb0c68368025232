//! Combatant domain models and save parameters.

use serde::Deserialize;

/// A combatant in the working sequence.
///
/// `is_active` marks whose turn it is inside one user's turn-order session;
/// the flag is only written back to storage on explicit save. `owner_id` is
/// the owning user's Discord id, absent on unowned legacy rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub armor_class: i32,
    pub max_hp: i32,
    pub current_hp: i32,
    pub initiative: i32,
    pub is_active: bool,
    pub owner_id: Option<String>,
}

impl Character {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            armor_class: entity.armor_class,
            max_hp: entity.max_hp,
            current_hp: entity.current_hp,
            initiative: entity.initiative,
            is_active: entity.is_active,
            owner_id: entity.owner_id,
        }
    }
}

/// JSON body of `POST /save-character`.
///
/// Field names match what the sortable-list front end sends. An `id` of zero
/// or below is the sentinel for a not-yet-persisted character.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCharacterDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub armor_class: i32,
    #[serde(rename = "maxHP")]
    pub max_hp: i32,
    #[serde(rename = "currentHP")]
    pub current_hp: i32,
    pub initiative: i32,
}

impl SaveCharacterDto {
    /// Whether this save should create a new row rather than update one.
    pub fn is_new(&self) -> bool {
        self.id <= 0
    }
}

/// Parameters for inserting a new character row.
#[derive(Debug, Clone)]
pub struct CreateCharacterParams {
    pub name: String,
    pub armor_class: i32,
    pub max_hp: i32,
    pub current_hp: i32,
    pub initiative: i32,
    pub owner_id: Option<String>,
}

impl CreateCharacterParams {
    pub fn from_dto(dto: SaveCharacterDto, owner_id: Option<String>) -> Self {
        Self {
            name: dto.name,
            armor_class: dto.armor_class,
            max_hp: dto.max_hp,
            current_hp: dto.current_hp,
            initiative: dto.initiative,
            owner_id,
        }
    }
}

/// Parameters for updating an existing character row.
///
/// The owner column is deliberately left untouched; ownership never changes
/// through the save flow.
#[derive(Debug, Clone)]
pub struct UpdateCharacterParams {
    pub id: i32,
    pub name: String,
    pub armor_class: i32,
    pub max_hp: i32,
    pub current_hp: i32,
    pub initiative: i32,
    pub is_active: bool,
}

impl UpdateCharacterParams {
    pub fn from_dto(dto: SaveCharacterDto, is_active: bool) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            armor_class: dto.armor_class,
            max_hp: dto.max_hp,
            current_hp: dto.current_hp,
            initiative: dto.initiative,
            is_active,
        }
    }
}
