use crate::server::{
    data::post::PostRepository,
    model::post::{CreatePostParams, UpdatePostParams},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod get_by_id;
mod get_page;
