pub use super::character::Entity as Character;
pub use super::encounter::Entity as Encounter;
pub use super::encounter_character::Entity as EncounterCharacter;
pub use super::user::Entity as User;
