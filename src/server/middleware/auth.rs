//! Permission evaluation for resource actions.
//!
//! Permissions form an ordered list that is evaluated front to back, stopping at the
//! first failure. The evaluation itself is a pure function of the actor, the action
//! and the permission list (`check` / `may_act`); `AuthGuard` adds the session and
//! database lookup needed to resolve the actor of a request.

use std::fmt;

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Kind of action a request performs on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Retrieve,
    Create,
    Update,
    PartialUpdate,
    Destroy,
}

impl Action {
    /// Whether the action only reads records.
    pub fn is_read_only(self) -> bool {
        matches!(self, Action::List | Action::Retrieve)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::List => "list",
            Action::Retrieve => "retrieve",
            Action::Create => "create",
            Action::Update => "update",
            Action::PartialUpdate => "partially update",
            Action::Destroy => "delete",
        };

        f.write_str(name)
    }
}

/// A single access rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Reads are open to everyone; writes need an authenticated actor.
    AuthenticatedOrReadOnly,
    /// Every action needs an authenticated actor.
    Authenticated,
    /// Reads are open; writes are restricted to the owner with the given user id.
    AuthorOrReadOnly(i32),
}

impl Permission {
    fn check(self, actor: Option<&User>, action: Action) -> Result<(), AuthError> {
        match self {
            Permission::AuthenticatedOrReadOnly => {
                if action.is_read_only() || actor.is_some() {
                    Ok(())
                } else {
                    Err(AuthError::AuthenticationRequired)
                }
            }
            Permission::Authenticated => match actor {
                Some(_) => Ok(()),
                None => Err(AuthError::AuthenticationRequired),
            },
            Permission::AuthorOrReadOnly(owner_id) => {
                if action.is_read_only() {
                    return Ok(());
                }

                match actor {
                    None => Err(AuthError::AuthenticationRequired),
                    Some(user) if user.id == owner_id => Ok(()),
                    Some(user) => Err(AuthError::AuthorizationDenied {
                        user_id: user.id,
                        action,
                    }),
                }
            }
        }
    }
}

/// Evaluates the permissions in order and returns the first failure.
///
/// # Arguments
/// - `actor` - The acting user, `None` for anonymous requests
/// - `action` - The action being performed
/// - `permissions` - Rules to evaluate, in order
///
/// # Returns
/// - `Ok(())` - Every permission passed
/// - `Err(AuthError::AuthenticationRequired)` - An anonymous actor attempted a guarded action
/// - `Err(AuthError::AuthorizationDenied)` - An authenticated actor is not the owner
pub fn check(
    actor: Option<&User>,
    action: Action,
    permissions: &[Permission],
) -> Result<(), AuthError> {
    permissions
        .iter()
        .try_for_each(|permission| permission.check(actor, action))
}

/// Returns whether the actor may perform the action under the given permissions.
pub fn may_act(actor: Option<&User>, action: Action, permissions: &[Permission]) -> bool {
    check(actor, action, permissions).is_ok()
}

/// Resolves the acting user of a request and enforces permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the acting user from the session.
    ///
    /// A session pointing at a user that no longer exists is treated as anonymous.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Authenticated actor
    /// - `Ok(None)` - Anonymous actor
    /// - `Err(AppError)` - Session or database failure
    pub async fn actor(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let user_repo = UserRepository::new(self.db);

        let user = user_repo.find_by_id(user_id).await?;

        if user.is_none() {
            tracing::debug!("Session references missing user {}", user_id);
        }

        Ok(user)
    }

    /// Resolves the actor and checks the permissions for the action.
    ///
    /// # Returns
    /// - `Ok(Option<User>)` - Access granted; the actor, if authenticated
    /// - `Err(AppError::AuthErr)` - Access refused
    pub async fn require(
        &self,
        action: Action,
        permissions: &[Permission],
    ) -> Result<Option<User>, AppError> {
        let actor = self.actor().await?;

        check(actor.as_ref(), action, permissions)?;

        Ok(actor)
    }

    /// Like `require`, but additionally demands an authenticated actor.
    ///
    /// # Returns
    /// - `Ok(User)` - Access granted to an authenticated actor
    /// - `Err(AppError::AuthErr(AuthError::AuthenticationRequired))` - Anonymous actor
    /// - `Err(AppError::AuthErr)` - Any other refusal
    pub async fn require_user(
        &self,
        action: Action,
        permissions: &[Permission],
    ) -> Result<User, AppError> {
        self.require(action, permissions)
            .await?
            .ok_or_else(|| AuthError::AuthenticationRequired.into())
    }
}
