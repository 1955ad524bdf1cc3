use crate::server::data::user::UserRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod find_by_ids;
mod find_by_username;
