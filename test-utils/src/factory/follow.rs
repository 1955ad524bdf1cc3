//! Follow factory for creating follow edges between users.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a follow edge where `user_id` follows `following_id`.
///
/// # Returns
/// - `Ok(entity::follow::Model)` - Created follow edge
/// - `Err(DbErr)` - Database error during insert
pub async fn create_follow(
    db: &DatabaseConnection,
    user_id: i32,
    following_id: i32,
) -> Result<entity::follow::Model, DbErr> {
    entity::follow::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        following_id: ActiveValue::Set(following_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
