//! Group data repository. Groups are read-only through this API.

use crate::server::model::group::Group;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every group ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    /// Gets a group by id.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - Group found
    /// - `Ok(None)` - No group with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Checks whether a group with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Group::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
