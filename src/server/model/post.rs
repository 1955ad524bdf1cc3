//! Post domain models and parameters.
//!
//! Provides the post domain model with its author's username resolved, parameter
//! types for create and update operations, and the paginated result returned by
//! limit/offset listing.

use chrono::{DateTime, Utc};

use crate::{
    model::post::{CreatePostDto, PatchPostDto, PostDto, UpdatePostDto},
    server::error::internal::InternalError,
};

/// Post with its author's username resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Primary key of the post.
    pub id: i32,
    /// Id of the owning user.
    pub author_id: i32,
    /// Username of the owning user.
    pub author: String,
    /// Optional group the post belongs to.
    pub group_id: Option<i32>,
    /// Text body.
    pub content: String,
    /// Creation timestamp, set once on insert.
    pub created: DateTime<Utc>,
}

impl Post {
    /// Converts a post entity and its author to a domain model.
    ///
    /// # Arguments
    /// - `entity` - The post entity from the database
    /// - `author` - The author loaded alongside the post, if any
    ///
    /// # Returns
    /// - `Ok(Post)` - Converted post with author username
    /// - `Err(InternalError::MissingRelatedUser)` - The author row was not found
    pub fn from_entity(
        entity: entity::post::Model,
        author: Option<entity::user::Model>,
    ) -> Result<Self, InternalError> {
        let Some(author) = author else {
            return Err(InternalError::MissingRelatedUser {
                entity: "post",
                id: entity.id,
                user_id: entity.author_id,
            });
        };

        Ok(Self {
            id: entity.id,
            author_id: entity.author_id,
            author: author.username,
            group_id: entity.group_id,
            content: entity.content,
            created: entity.created,
        })
    }

    /// Converts the post domain model to a DTO for API responses.
    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            author: self.author,
            group: self.group_id,
            content: self.content,
            created: self.created,
        }
    }
}

/// A page of posts along with the size of the full ordered set.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPosts {
    /// Posts at positions `[offset, offset + limit)` of the full set.
    pub posts: Vec<Post>,
    /// Total number of posts.
    pub total: u64,
}

/// Parameters for creating a new post.
#[derive(Debug, Clone)]
pub struct CreatePostParams {
    /// Author of the post, always the acting user.
    pub author_id: i32,
    pub group_id: Option<i32>,
    pub content: String,
}

impl CreatePostParams {
    /// Builds create parameters from the request body, stamping the acting user as author.
    ///
    /// # Arguments
    /// - `author_id` - Id of the acting user
    /// - `dto` - Request body
    pub fn from_dto(author_id: i32, dto: CreatePostDto) -> Self {
        Self {
            author_id,
            group_id: dto.group,
            content: dto.content,
        }
    }
}

/// Parameters for updating an existing post.
///
/// `None` leaves a field unchanged. For `group_id`, `Some(None)` clears the group.
#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub id: i32,
    pub content: Option<String>,
    pub group_id: Option<Option<i32>>,
}

impl UpdatePostParams {
    /// Builds parameters for a full update (PUT) where `content` is required.
    pub fn from_update_dto(id: i32, dto: UpdatePostDto) -> Self {
        Self {
            id,
            content: Some(dto.content),
            group_id: dto.group,
        }
    }

    /// Builds parameters for a partial update (PATCH).
    pub fn from_patch_dto(id: i32, dto: PatchPostDto) -> Self {
        Self {
            id,
            content: dto.content,
            group_id: dto.group,
        }
    }
}
