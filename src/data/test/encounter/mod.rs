use crate::data::encounter::EncounterRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_owner;
mod membership;
