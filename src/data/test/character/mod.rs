use crate::data::character::CharacterRepository;
use crate::model::character::{CreateCharacterParams, UpdateCharacterParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_encounter;
mod get_by_owner;
mod update;
