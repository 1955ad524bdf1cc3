use crate::server::{
    error::AppError,
    model::post::{CreatePostParams, UpdatePostParams},
    service::post::PostService,
    util::pagination::LimitOffset,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
