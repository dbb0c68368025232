//! SeaORM entity models for the turnboard database schema.

pub mod prelude;

pub mod character;
pub mod encounter;
pub mod encounter_character;
pub mod user;
