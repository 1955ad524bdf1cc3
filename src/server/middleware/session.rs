//! Type-safe session management wrappers.
//!
//! The surrounding authentication infrastructure stores the id of the logged-in user in the
//! session. This module centralizes the session key and the value type so handlers never
//! touch raw session keys.

use tower_sessions::Session;

use crate::server::error::AppError;

/// Session key holding the authenticated user's id.
pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles user authentication state: storing and retrieving the authenticated
/// user's id and clearing the session on logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session, establishing a logged-in session.
    ///
    /// Called by the authentication infrastructure once a user has logged in.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the user
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (anonymous)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove the authentication state.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
