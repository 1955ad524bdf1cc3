//! Follow edge data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct FollowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all edges owned by a follower, ordered by id.
    ///
    /// # Arguments
    /// - `user_id` - The follower
    /// - `following_id` - When set, only the edge to this user is returned
    ///
    /// # Returns
    /// - `Ok(Vec<entity::follow::Model>)` - Matching edges
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
        following_id: Option<i32>,
    ) -> Result<Vec<entity::follow::Model>, DbErr> {
        let mut query = entity::prelude::Follow::find()
            .filter(entity::follow::Column::UserId.eq(user_id));

        if let Some(following_id) = following_id {
            query = query.filter(entity::follow::Column::FollowingId.eq(following_id));
        }

        query
            .order_by_asc(entity::follow::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets an edge by id, only if it is owned by the given follower.
    pub async fn get_by_id(
        &self,
        user_id: i32,
        id: i32,
    ) -> Result<Option<entity::follow::Model>, DbErr> {
        entity::prelude::Follow::find_by_id(id)
            .filter(entity::follow::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Checks whether `user_id` already follows `following_id`.
    pub async fn exists(&self, user_id: i32, following_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Follow::find()
            .filter(entity::follow::Column::UserId.eq(user_id))
            .filter(entity::follow::Column::FollowingId.eq(following_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new edge.
    ///
    /// # Returns
    /// - `Ok(entity::follow::Model)` - The inserted edge
    /// - `Err(DbErr)` - Database error, including a unique index violation for duplicates
    pub async fn create(
        &self,
        user_id: i32,
        following_id: i32,
    ) -> Result<entity::follow::Model, DbErr> {
        entity::follow::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            following_id: ActiveValue::Set(following_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Follow::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
