//! Follow edge domain models and parameters.

use std::collections::HashMap;

use crate::{
    model::follow::{CreateFollowDto, FollowDto},
    server::error::internal::InternalError,
};

/// Directed edge: `user` follows `following`.
#[derive(Debug, Clone, PartialEq)]
pub struct Follow {
    pub id: i32,
    /// Follower, the owner of the edge.
    pub user_id: i32,
    pub user: String,
    /// The followed user.
    pub following_id: i32,
    pub following: String,
}

impl Follow {
    /// Converts a follow entity to a domain model using a preloaded username lookup.
    ///
    /// # Arguments
    /// - `entity` - The follow entity from the database
    /// - `usernames` - Map from user id to username covering both ends of the edge
    ///
    /// # Returns
    /// - `Ok(Follow)` - Converted follow edge with both usernames
    /// - `Err(InternalError::MissingRelatedUser)` - Either user is missing from the lookup
    pub fn from_entity(
        entity: entity::follow::Model,
        usernames: &HashMap<i32, String>,
    ) -> Result<Self, InternalError> {
        let username = |user_id: i32| {
            usernames
                .get(&user_id)
                .cloned()
                .ok_or(InternalError::MissingRelatedUser {
                    entity: "follow",
                    id: entity.id,
                    user_id,
                })
        };

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            user: username(entity.user_id)?,
            following_id: entity.following_id,
            following: username(entity.following_id)?,
        })
    }

    pub fn into_dto(self) -> FollowDto {
        FollowDto {
            id: self.id,
            user: self.user,
            following: self.following,
        }
    }
}

/// Parameters for creating a follow edge.
#[derive(Debug, Clone)]
pub struct CreateFollowParams {
    /// Follower, always the acting user.
    pub user_id: i32,
    /// Username of the user to follow.
    pub following: String,
}

impl CreateFollowParams {
    pub fn from_dto(user_id: i32, dto: CreateFollowDto) -> Self {
        Self {
            user_id,
            following: dto.following,
        }
    }
}
