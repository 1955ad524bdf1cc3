//! User domain model.
//!
//! Users are created by the surrounding authentication infrastructure and are
//! read-only through this API. They act as the request actor and as the owner of
//! posts, comments and follow edges.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Registered user identity.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Primary key of the user.
    pub id: i32,
    /// Unique username, used as the serialized form of authors and follow edges.
    pub username: String,
    /// When the user registered.
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            date_joined: entity.date_joined,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            date_joined: self.date_joined,
        }
    }
}
