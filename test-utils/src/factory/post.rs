//! Post factory for creating test post entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let post = PostFactory::new(&db, author.id)
///     .content("Hello")
///     .group(group.id)
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    group_id: Option<i32>,
    content: String,
    created: DateTime<Utc>,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - group: none
    /// - content: `"Post {id}"`
    /// - created: now
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            group_id: None,
            content: format!("Post {}", id),
            created: Utc::now(),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn group(mut self, group_id: i32) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Sets the creation timestamp, useful for ordering tests.
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Builds and inserts the post entity into the database.
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            group_id: ActiveValue::Set(self.group_id),
            content: ActiveValue::Set(self.content),
            created: ActiveValue::Set(self.created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values for the given author.
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}
