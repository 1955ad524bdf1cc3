//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, CreateCommentDto, PatchCommentDto, UpdateCommentDto},
    server::error::internal::InternalError,
};

/// Comment on a post with its author's username resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    /// Post the comment belongs to.
    pub post_id: i32,
    pub author_id: i32,
    pub author: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl Comment {
    /// Converts a comment entity and its author to a domain model.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Converted comment with author username
    /// - `Err(InternalError::MissingRelatedUser)` - The author row was not found
    pub fn from_entity(
        entity: entity::comment::Model,
        author: Option<entity::user::Model>,
    ) -> Result<Self, InternalError> {
        let Some(author) = author else {
            return Err(InternalError::MissingRelatedUser {
                entity: "comment",
                id: entity.id,
                user_id: entity.author_id,
            });
        };

        Ok(Self {
            id: entity.id,
            post_id: entity.post_id,
            author_id: entity.author_id,
            author: author.username,
            content: entity.content,
            created: entity.created,
        })
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            author: self.author,
            post: self.post_id,
            content: self.content,
            created: self.created,
        }
    }
}

/// Parameters for creating a comment under a post.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    /// Post taken from the request path.
    pub post_id: i32,
    /// Author, always the acting user.
    pub author_id: i32,
    pub content: String,
}

impl CreateCommentParams {
    /// Builds create parameters, stamping the path post and the acting user.
    pub fn from_dto(post_id: i32, author_id: i32, dto: CreateCommentDto) -> Self {
        Self {
            post_id,
            author_id,
            content: dto.content,
        }
    }
}

/// Parameters for updating a comment. `None` leaves the content unchanged.
#[derive(Debug, Clone)]
pub struct UpdateCommentParams {
    pub id: i32,
    pub content: Option<String>,
}

impl UpdateCommentParams {
    pub fn from_update_dto(id: i32, dto: UpdateCommentDto) -> Self {
        Self {
            id,
            content: Some(dto.content),
        }
    }

    pub fn from_patch_dto(id: i32, dto: PatchCommentDto) -> Self {
        Self {
            id,
            content: dto.content,
        }
    }
}
