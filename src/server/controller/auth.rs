use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Get the currently authenticated user.
///
/// # Returns
/// - `200 OK` - The acting user
/// - `401 Unauthorized` - No authenticated user in the session
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Currently authenticated user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user) = AuthGuard::new(&state.db, &session).actor().await? else {
        return Err(AuthError::AuthenticationRequired.into());
    };

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Clear the session, making subsequent requests anonymous.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}
