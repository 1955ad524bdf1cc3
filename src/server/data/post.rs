//! Post data repository for database operations.
//!
//! Provides CRUD operations for posts. Read queries load the author alongside each post
//! and use one deterministic ordering, newest first with the id as tie-breaker, so that
//! limit/offset pages are stable.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect, Select,
};

use crate::server::model::post::{CreatePostParams, UpdatePostParams};

/// A post entity together with its author.
pub type PostWithAuthor = (entity::post::Model, Option<entity::user::Model>);

/// Repository providing database operations for posts.
pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    /// Creates a new PostRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PostRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn ordered() -> Select<entity::post::Entity> {
        entity::prelude::Post::find()
            .order_by_desc(entity::post::Column::Created)
            .order_by_desc(entity::post::Column::Id)
    }

    /// Gets every post with its author, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<PostWithAuthor>)` - All posts in display order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<PostWithAuthor>, DbErr> {
        Self::ordered()
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    /// Gets a slice of the ordered post set along with the total count.
    ///
    /// # Arguments
    /// - `offset` - Number of posts to skip
    /// - `limit` - Maximum number of posts to return
    ///
    /// # Returns
    /// - `Ok((posts, total))` - Posts at positions `[offset, offset + limit)` and the full count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_page(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<PostWithAuthor>, u64), DbErr> {
        let total = entity::prelude::Post::find().count(self.db).await?;

        let posts = Self::ordered()
            .offset(offset)
            .limit(limit)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok((posts, total))
    }

    /// Gets a post with its author by id.
    ///
    /// # Returns
    /// - `Ok(Some(PostWithAuthor))` - Post found
    /// - `Ok(None)` - No post with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PostWithAuthor>, DbErr> {
        entity::prelude::Post::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// Checks whether a post with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Post::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Inserts a new post stamped with the current time.
    ///
    /// # Arguments
    /// - `params` - Author, optional group and content
    ///
    /// # Returns
    /// - `Ok(entity::post::Model)` - The inserted post
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreatePostParams) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            author_id: ActiveValue::Set(params.author_id),
            group_id: ActiveValue::Set(params.group_id),
            content: ActiveValue::Set(params.content),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates the provided fields of a post, leaving the others untouched.
    ///
    /// # Arguments
    /// - `params` - Post id and the fields to change
    ///
    /// # Returns
    /// - `Ok(entity::post::Model)` - The updated post
    /// - `Err(DbErr::RecordNotFound)` - No post with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdatePostParams) -> Result<entity::post::Model, DbErr> {
        let post = entity::prelude::Post::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Post {} not found", params.id)))?;

        let mut active: entity::post::ActiveModel = post.into();

        if let Some(content) = params.content {
            active.content = ActiveValue::Set(content);
        }
        if let Some(group_id) = params.group_id {
            active.group_id = ActiveValue::Set(group_id);
        }

        active.update(self.db).await
    }

    /// Deletes a post by id. Its comments are removed by the foreign key cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Post::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
