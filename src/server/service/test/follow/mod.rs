use crate::server::{
    error::AppError, model::follow::CreateFollowParams, service::follow::FollowService,
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod subscriptions;

/// Creates a follower who follows `Alice`, `alice2` and `bob`.
///
/// Returns the follower's id.
async fn create_follower_of_alices(db: &DatabaseConnection) -> Result<i32, AppError> {
    let follower = factory::user::create_user_with_username(db, "reader").await?;

    for username in ["Alice", "alice2", "bob"] {
        let author = factory::user::create_user_with_username(db, username).await?;
        factory::follow::create_follow(db, follower.id, author.id).await?;
    }

    Ok(follower.id)
}

fn following(follows: &[crate::server::model::follow::Follow]) -> Vec<&str> {
    follows.iter().map(|f| f.following.as_str()).collect()
}
