use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FollowDto {
    pub id: i32,
    /// Username of the follower.
    pub user: String,
    /// Username of the followed user.
    pub following: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFollowDto {
    /// Username of the user to follow.
    pub following: String,
}
