//! Error types and HTTP response mapping.
//!
//! `AppError` is the single error type returned by handlers and services. Access-control
//! failures carry their own status mapping in `AuthError`; request problems surface as
//! 400 or 404 with a `{error}` body, and every infrastructure failure becomes a 500 whose
//! details are only logged.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid or missing environment configuration, only raised during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Refused by the permission evaluator (401 or 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Raised by the session store while migrating its table.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session read or write failed, so the actor of the request is unknown.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// The request URL could not be joined onto `APP_URL` for a pagination link.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// The addressed record does not exist, or is not visible under the request scope
    /// (a comment under another post, another user's follow edge).
    ///
    /// Results in 404 Not Found with the message as body.
    #[error("{0}")]
    NotFound(String),

    /// The request body failed validation: blank content, an unknown group or follow
    /// target, a self-follow or duplicate follow, or JSON that could not be parsed.
    ///
    /// Results in 400 Bad Request with the message as body.
    #[error("{0}")]
    ValidationFailed(String),
}

/// Malformed bodies, missing fields and wrong content types are validation failures.
///
/// Handlers take `Result<Json<T>, JsonRejection>` and unwrap it only after the access
/// checks have run, so an anonymous request with a broken body still gets 401.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationFailed(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::ValidationFailed(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            err => {
                tracing::error!("{}", err);

                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

/// Builds the `{error}` body shared by every error status.
pub(crate) fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}
