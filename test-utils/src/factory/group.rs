//! Group factory for creating test group entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    description: String,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Group {id}"`
    /// - slug: `"group-{id}"`
    /// - description: `"Description for group {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Group {}", id),
            slug: format!("group-{}", id),
            description: format!("Description for group {}", id),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Builds and inserts the group entity into the database.
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db).build().await
}
