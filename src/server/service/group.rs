use sea_orm::DatabaseConnection;

use crate::server::{data::group::GroupRepository, error::AppError, model::group::Group};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all groups
    pub async fn get_all(&self) -> Result<Vec<Group>, AppError> {
        let repo = GroupRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a group by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Group>, AppError> {
        let repo = GroupRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }
}
