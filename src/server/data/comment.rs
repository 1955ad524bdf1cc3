//! Comment data repository for database operations.
//!
//! Every query is scoped to a single post, since comments are only addressable through
//! the post they belong to.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::{CreateCommentParams, UpdateCommentParams};

/// A comment entity together with its author.
pub type CommentWithAuthor = (entity::comment::Model, Option<entity::user::Model>);

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all comments of a post ordered by id.
    ///
    /// Returns an empty list when the post does not exist.
    pub async fn get_by_post_id(&self, post_id: i32) -> Result<Vec<CommentWithAuthor>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .order_by_asc(entity::comment::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    /// Gets a comment by id, only if it belongs to the given post.
    ///
    /// # Returns
    /// - `Ok(Some(CommentWithAuthor))` - Comment found under that post
    /// - `Ok(None)` - No such comment, or it belongs to another post
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(
        &self,
        post_id: i32,
        id: i32,
    ) -> Result<Option<CommentWithAuthor>, DbErr> {
        entity::prelude::Comment::find_by_id(id)
            .filter(entity::comment::Column::PostId.eq(post_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// Inserts a new comment stamped with the current time.
    pub async fn create(
        &self,
        params: CreateCommentParams,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            post_id: ActiveValue::Set(params.post_id),
            author_id: ActiveValue::Set(params.author_id),
            content: ActiveValue::Set(params.content),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates the content of a comment if provided.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - The updated comment
    /// - `Err(DbErr::RecordNotFound)` - No comment with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        params: UpdateCommentParams,
    ) -> Result<entity::comment::Model, DbErr> {
        let comment = entity::prelude::Comment::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Comment {} not found", params.id)))?;

        let mut active: entity::comment::ActiveModel = comment.into();

        if let Some(content) = params.content {
            active.content = ActiveValue::Set(content);
        }

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
