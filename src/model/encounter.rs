//! Encounter domain model.

use chrono::{DateTime, Utc};

/// A named combat session owning a set of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encounter {
    pub id: i32,
    pub name: String,
    pub owner_id: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub encounter_type: String,
    pub campaign_id: Option<i32>,
}

impl Encounter {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::encounter::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            owner_id: entity.owner_id,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            encounter_type: entity.encounter_type,
            campaign_id: entity.campaign_id,
        }
    }
}
