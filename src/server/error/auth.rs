use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::error_response, middleware::auth::Action};

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request has no authenticated actor but the action requires one.
    ///
    /// Raised for writes by anonymous actors and for every Follow action.
    /// Results in a 401 Unauthorized response.
    #[error("Authentication credentials were not provided")]
    AuthenticationRequired,

    /// The actor is authenticated but does not own the record it tries to modify.
    ///
    /// Results in a 403 Forbidden response. The record itself stays visible.
    #[error("User {user_id} is not allowed to {action} this record")]
    AuthorizationDenied {
        /// Id of the acting user
        user_id: i32,
        /// The refused action
        action: Action,
    },
}

/// Maps `AuthenticationRequired` to 401 and `AuthorizationDenied` to 403.
///
/// The refused user and action are logged at debug level; the body stays generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AuthenticationRequired => error_response(
                StatusCode::UNAUTHORIZED,
                "Authentication credentials were not provided.".to_string(),
            ),
            Self::AuthorizationDenied { .. } => error_response(
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action.".to_string(),
            ),
        }
    }
}
