use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{follow::FollowRepository, user::UserRepository},
    error::AppError,
    model::follow::{CreateFollowParams, Follow},
};

pub struct FollowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the edges owned by the actor
    ///
    /// A non-empty `search` keeps only the edge whose followed username equals it exactly
    /// (case-sensitive). An unknown username yields an empty list.
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
        search: Option<&str>,
    ) -> Result<Vec<Follow>, AppError> {
        let repo = FollowRepository::new(self.db);

        let following_id = match search.filter(|s| !s.is_empty()) {
            Some(username) => {
                let user_repo = UserRepository::new(self.db);

                match user_repo.find_by_username(username).await? {
                    Some(user) => Some(user.id),
                    None => return Ok(Vec::new()),
                }
            }
            None => None,
        };

        let follows = repo.get_by_user_id(user_id, following_id).await?;

        self.with_usernames(follows).await
    }

    /// Gets the actor's subscriptions
    ///
    /// Starts from every edge owned by the actor and, when `search` is non-empty, keeps the
    /// edges whose followed username contains it, ignoring case.
    pub async fn subscriptions(
        &self,
        user_id: i32,
        search: Option<&str>,
    ) -> Result<Vec<Follow>, AppError> {
        let repo = FollowRepository::new(self.db);

        let follows = self
            .with_usernames(repo.get_by_user_id(user_id, None).await?)
            .await?;

        let Some(search) = search.filter(|s| !s.is_empty()) else {
            return Ok(follows);
        };

        let needle = search.to_lowercase();

        Ok(follows
            .into_iter()
            .filter(|follow| follow.following.to_lowercase().contains(&needle))
            .collect())
    }

    /// Gets one of the actor's edges by ID
    /// Returns None if it doesn't exist or belongs to another user
    pub async fn get_by_id(&self, user_id: i32, id: i32) -> Result<Option<Follow>, AppError> {
        let repo = FollowRepository::new(self.db);

        let Some(follow) = repo.get_by_id(user_id, id).await? else {
            return Ok(None);
        };

        Ok(self.with_usernames(vec![follow]).await?.pop())
    }

    /// Follows another user
    ///
    /// The target must exist, must not be the actor, and must not already be followed.
    pub async fn create(&self, params: CreateFollowParams) -> Result<Follow, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(following) = user_repo.find_by_username(&params.following).await? else {
            return Err(AppError::ValidationFailed(format!(
                "following: Object with username={} does not exist.",
                params.following
            )));
        };

        if following.id == params.user_id {
            return Err(AppError::ValidationFailed(
                "following: You cannot follow yourself.".to_string(),
            ));
        }

        let repo = FollowRepository::new(self.db);

        if repo.exists(params.user_id, following.id).await? {
            return Err(already_following(&following.username));
        }

        let follow = repo
            .create(params.user_id, following.id)
            .await
            .map_err(|err| map_create_err(err, &following.username))?;

        self.get_by_id(params.user_id, follow.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Follow not found after creation".to_string()))
    }

    /// Unfollows
    /// Returns true if deleted, false if not found among the actor's edges
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<bool, AppError> {
        let repo = FollowRepository::new(self.db);

        if repo.get_by_id(user_id, id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    /// Resolves both usernames of each edge with a single user query.
    async fn with_usernames(
        &self,
        follows: Vec<entity::follow::Model>,
    ) -> Result<Vec<Follow>, AppError> {
        let mut user_ids: Vec<i32> = follows
            .iter()
            .flat_map(|f| [f.user_id, f.following_id])
            .collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let user_repo = UserRepository::new(self.db);

        let usernames: HashMap<i32, String> = user_repo
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user.username))
            .collect();

        follows
            .into_iter()
            .map(|follow| Follow::from_entity(follow, &usernames).map_err(Into::into))
            .collect()
    }
}

fn already_following(username: &str) -> AppError {
    AppError::ValidationFailed(format!("following: You already follow {}.", username))
}

/// Maps an insert failure on the follow table.
///
/// A concurrent request can insert the same edge between the existence check and the
/// insert; the unique `(user_id, following_id)` index then rejects it, which is the
/// same validation failure as the checked path.
pub(crate) fn map_create_err(err: DbErr, username: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => already_following(username),
        _ => err.into(),
    }
}
