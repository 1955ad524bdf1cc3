use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository},
    error::AppError,
    model::comment::{Comment, CreateCommentParams, UpdateCommentParams},
    service::validate_content,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the comments of a post ordered by ID
    ///
    /// A post that doesn't exist simply has no comments.
    pub async fn get_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, AppError> {
        let repo = CommentRepository::new(self.db);

        let comments = repo.get_by_post_id(post_id).await?;

        comments
            .into_iter()
            .map(|(comment, author)| Comment::from_entity(comment, author).map_err(Into::into))
            .collect()
    }

    /// Gets a comment by ID, scoped to the post it belongs to
    pub async fn get_by_id(&self, post_id: i32, id: i32) -> Result<Option<Comment>, AppError> {
        let repo = CommentRepository::new(self.db);

        let Some((comment, author)) = repo.get_by_id(post_id, id).await? else {
            return Ok(None);
        };

        Ok(Some(Comment::from_entity(comment, author)?))
    }

    /// Creates a comment under an existing post
    ///
    /// Fails with NotFound if the post from the request path doesn't exist.
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        validate_content(&params.content)?;

        let post_repo = PostRepository::new(self.db);

        if !post_repo.exists(params.post_id).await? {
            return Err(AppError::NotFound(format!(
                "Post {} not found",
                params.post_id
            )));
        }

        let repo = CommentRepository::new(self.db);
        let post_id = params.post_id;

        let comment = repo.create(params).await?;

        self.get_by_id(post_id, comment.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found after creation".to_string()))
    }

    /// Updates a comment's content
    /// Returns None if the comment doesn't exist under the post
    pub async fn update(
        &self,
        post_id: i32,
        params: UpdateCommentParams,
    ) -> Result<Option<Comment>, AppError> {
        if let Some(content) = &params.content {
            validate_content(content)?;
        }

        let repo = CommentRepository::new(self.db);

        if repo.get_by_id(post_id, params.id).await?.is_none() {
            return Ok(None);
        }

        let comment = repo.update(params).await?;

        self.get_by_id(post_id, comment.id).await
    }

    /// Deletes a comment
    /// Returns true if deleted, false if not found under the post
    pub async fn delete(&self, post_id: i32, id: i32) -> Result<bool, AppError> {
        let repo = CommentRepository::new(self.db);

        if repo.get_by_id(post_id, id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
