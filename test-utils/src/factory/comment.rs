//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    author_id: i32,
    content: String,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Comment {id}"`
    pub fn new(db: &'a DatabaseConnection, post_id: i32, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            post_id,
            author_id,
            content: format!("Comment {}", id),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            post_id: ActiveValue::Set(self.post_id),
            author_id: ActiveValue::Set(self.author_id),
            content: ActiveValue::Set(self.content),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default content.
pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, post_id, author_id).build().await
}
