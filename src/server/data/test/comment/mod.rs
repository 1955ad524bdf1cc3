use crate::server::{
    data::comment::CommentRepository,
    model::comment::{CreateCommentParams, UpdateCommentParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
mod get_by_post_id;
