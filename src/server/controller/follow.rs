use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        follow::{CreateFollowDto, FollowDto},
    },
    server::{
        error::AppError,
        middleware::auth::{Action, AuthGuard, Permission},
        model::follow::CreateFollowParams,
        service::follow::FollowService,
        state::AppState,
    },
};

/// Tag for grouping follow endpoints in OpenAPI documentation
pub static FOLLOW_TAG: &str = "follow";

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
}

/// List the users the actor follows.
///
/// A non-empty `search` keeps only the edge whose followed username equals it exactly.
///
/// # Access Control
/// - `Authenticated` - Requires an authenticated user
///
/// # Returns
/// - `200 OK` - The actor's follow edges ordered by id
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/follow/",
    tag = FOLLOW_TAG,
    params(
        ("search" = Option<String>, Query, description = "Exact, case-sensitive username of the followed user")
    ),
    responses(
        (status = 200, description = "Follow edges of the actor", body = Vec<FollowDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_follows(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_user(Action::List, &[Permission::Authenticated])
        .await?;

    let service = FollowService::new(&state.db);

    let follows = service
        .get_by_user_id(actor.id, Some(params.search.as_str()))
        .await?;

    Ok((
        StatusCode::OK,
        Json(follows.into_iter().map(|f| f.into_dto()).collect::<Vec<_>>()),
    ))
}

/// List the actor's subscriptions filtered by a username fragment.
///
/// A non-empty `search` keeps the edges whose followed username contains it, ignoring case.
/// Never paginated.
///
/// # Access Control
/// - `Authenticated` - Requires an authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/follow/subscriptions/",
    tag = FOLLOW_TAG,
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring of the followed username")
    ),
    responses(
        (status = 200, description = "Matching follow edges of the actor", body = Vec<FollowDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscriptions(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_user(Action::List, &[Permission::Authenticated])
        .await?;

    let service = FollowService::new(&state.db);

    let follows = service
        .subscriptions(actor.id, Some(params.search.as_str()))
        .await?;

    Ok((
        StatusCode::OK,
        Json(follows.into_iter().map(|f| f.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Follow another user.
///
/// # Access Control
/// - `Authenticated` - Requires an authenticated user
///
/// # Returns
/// - `201 Created` - The created follow edge
/// - `400 Bad Request` - Unknown user, self-follow, duplicate edge or malformed body
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/follow/",
    tag = FOLLOW_TAG,
    request_body = CreateFollowDto,
    responses(
        (status = 201, description = "Successfully followed user", body = FollowDto),
        (status = 400, description = "Invalid follow data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_follow(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateFollowDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_user(Action::Create, &[Permission::Authenticated])
        .await?;

    let Json(payload) = payload?;

    let service = FollowService::new(&state.db);

    let params = CreateFollowParams::from_dto(actor.id, payload);

    let follow = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(follow.into_dto())))
}

/// Get one of the actor's follow edges by ID.
#[utoipa::path(
    get,
    path = "/api/v1/follow/{id}/",
    tag = FOLLOW_TAG,
    params(
        ("id" = i32, Path, description = "Follow ID")
    ),
    responses(
        (status = 200, description = "Follow edge details", body = FollowDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Follow edge not found among the actor's edges", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_follow_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_user(Action::Retrieve, &[Permission::Authenticated])
        .await?;

    let service = FollowService::new(&state.db);

    match service.get_by_id(actor.id, id).await? {
        Some(follow) => Ok((StatusCode::OK, Json(follow.into_dto()))),
        None => Err(AppError::NotFound("Follow not found".to_string())),
    }
}

/// Unfollow.
#[utoipa::path(
    delete,
    path = "/api/v1/follow/{id}/",
    tag = FOLLOW_TAG,
    params(
        ("id" = i32, Path, description = "Follow ID")
    ),
    responses(
        (status = 204, description = "Successfully unfollowed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Follow edge not found among the actor's edges", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_follow(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_user(Action::Destroy, &[Permission::Authenticated])
        .await?;

    let service = FollowService::new(&state.db);

    if service.delete(actor.id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Follow not found".to_string()))
    }
}
