use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        group::GroupRepository,
        post::{PostRepository, PostWithAuthor},
    },
    error::AppError,
    model::post::{CreatePostParams, PaginatedPosts, Post, UpdatePostParams},
    service::validate_content,
    util::pagination::LimitOffset,
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all posts, newest first
    pub async fn get_all(&self) -> Result<Vec<Post>, AppError> {
        let repo = PostRepository::new(self.db);

        let posts = repo.get_all().await?;

        into_posts(posts)
    }

    /// Gets one limit/offset slice of the ordered posts with the total count
    pub async fn get_paginated(&self, page: LimitOffset) -> Result<PaginatedPosts, AppError> {
        let repo = PostRepository::new(self.db);

        let (posts, total) = repo.get_page(page.offset, page.limit).await?;

        Ok(PaginatedPosts {
            posts: into_posts(posts)?,
            total,
        })
    }

    /// Gets a specific post by ID with its author
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Post>, AppError> {
        let repo = PostRepository::new(self.db);

        let Some((post, author)) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(Post::from_entity(post, author)?))
    }

    /// Creates a new post after validating content and group reference
    pub async fn create(&self, params: CreatePostParams) -> Result<Post, AppError> {
        validate_content(&params.content)?;
        self.validate_group(params.group_id).await?;

        let repo = PostRepository::new(self.db);

        let post = repo.create(params).await?;

        self.get_by_id(post.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found after creation".to_string()))
    }

    /// Updates a post's content and/or group
    /// Returns None if the post doesn't exist
    pub async fn update(&self, params: UpdatePostParams) -> Result<Option<Post>, AppError> {
        if let Some(content) = &params.content {
            validate_content(content)?;
        }
        if let Some(group_id) = params.group_id {
            self.validate_group(group_id).await?;
        }

        let repo = PostRepository::new(self.db);

        if !repo.exists(params.id).await? {
            return Ok(None);
        }

        let post = repo.update(params).await?;

        self.get_by_id(post.id).await
    }

    /// Deletes a post
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = PostRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    async fn validate_group(&self, group_id: Option<i32>) -> Result<(), AppError> {
        let Some(group_id) = group_id else {
            return Ok(());
        };

        let group_repo = GroupRepository::new(self.db);

        if !group_repo.exists(group_id).await? {
            return Err(AppError::ValidationFailed(format!(
                "group: Invalid pk \"{}\" - object does not exist.",
                group_id
            )));
        }

        Ok(())
    }
}

fn into_posts(posts: Vec<PostWithAuthor>) -> Result<Vec<Post>, AppError> {
    posts
        .into_iter()
        .map(|(post, author)| Post::from_entity(post, author).map_err(Into::into))
        .collect()
}
