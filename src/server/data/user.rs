//! User data repository for database operations.
//!
//! Users are read-only through this API, so the repository only offers lookups used to
//! resolve the acting user and to validate follow targets.

use crate::server::model::user::User;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository providing read access to user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their id.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact, case-sensitive username.
    ///
    /// # Arguments
    /// - `username` - Username to match
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Fetches all users whose id is in the provided list.
    ///
    /// Ids without a matching user are skipped, so the result may be shorter than the input.
    ///
    /// # Arguments
    /// - `user_ids` - Ids to look up
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Matching users in no particular order
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_ids(&self, user_ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
