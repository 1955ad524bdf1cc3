use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::deserialize_some;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i32,
    /// Username of the author.
    pub author: String,
    pub group: Option<i32>,
    pub content: String,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePostDto {
    pub content: String,
    #[serde(default)]
    pub group: Option<i32>,
}

/// Full replacement of a post. `content` is required, `group: null` clears the group
/// and an omitted `group` keeps the current one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePostDto {
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub group: Option<Option<i32>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchPostDto {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub group: Option<Option<i32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedPostsDto {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<PostDto>,
}

/// Post list body: the bare list, or the limit/offset envelope when both parameters are given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PostListDto {
    Paginated(PaginatedPostsDto),
    List(Vec<PostDto>),
}
