use crate::data::user::UserRepository;
use crate::model::user::UpsertUserParams;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find;
mod upsert;
