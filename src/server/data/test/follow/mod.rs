use crate::server::data::follow::FollowRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod get_by_user_id;
