use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, PatchCommentDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{self, Action, AuthGuard, Permission},
        model::comment::{CreateCommentParams, UpdateCommentParams},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List the comments of a post.
///
/// A post that does not exist yields an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/comments/",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Comments of the post ordered by id", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(Action::List, &[Permission::AuthenticatedOrReadOnly])
        .await?;

    let service = CommentService::new(&state.db);

    let comments = service.get_by_post_id(post_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            comments
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Comment on a post.
///
/// The post is taken from the path and the acting user becomes the author.
///
/// # Access Control
/// - `AuthenticatedOrReadOnly` - Requires an authenticated user
///
/// # Returns
/// - `201 Created` - The created comment
/// - `400 Bad Request` - Blank content or malformed body
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Post not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/comments/",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    payload: Result<Json<CreateCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_user(Action::Create, &[Permission::AuthenticatedOrReadOnly])
        .await?;

    let Json(payload) = payload?;

    let service = CommentService::new(&state.db);

    let params = CreateCommentParams::from_dto(post_id, actor.id, payload);

    let comment = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Get a comment of a post by ID.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/comments/{id}/",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment details", body = CommentDto),
        (status = 404, description = "Comment not found under this post", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment_by_id(
    State(state): State<AppState>,
    session: Session,
    Path((post_id, id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(Action::Retrieve, &[Permission::AuthenticatedOrReadOnly])
        .await?;

    let service = CommentService::new(&state.db);

    match service.get_by_id(post_id, id).await? {
        Some(comment) => Ok((StatusCode::OK, Json(comment.into_dto()))),
        None => Err(AppError::NotFound("Comment not found".to_string())),
    }
}

/// Replace a comment's content.
///
/// # Access Control
/// - `AuthenticatedOrReadOnly` - Requires an authenticated user
/// - `AuthorOrReadOnly` - Only the author may update the comment
#[utoipa::path(
    put,
    path = "/api/v1/posts/{post_id}/comments/{id}/",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ("id" = i32, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Successfully updated comment", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Comment not found under this post", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    session: Session,
    Path((post_id, id)): Path<(i32, i32)>,
    payload: Result<Json<UpdateCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    authorize_author(&state.db, &session, post_id, id, Action::Update).await?;

    let Json(payload) = payload?;

    let params = UpdateCommentParams::from_update_dto(id, payload);

    save(&state.db, post_id, params).await
}

/// Partially update a comment.
#[utoipa::path(
    patch,
    path = "/api/v1/posts/{post_id}/comments/{id}/",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ("id" = i32, Path, description = "Comment ID")
    ),
    request_body = PatchCommentDto,
    responses(
        (status = 200, description = "Successfully updated comment", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Comment not found under this post", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_comment(
    State(state): State<AppState>,
    session: Session,
    Path((post_id, id)): Path<(i32, i32)>,
    payload: Result<Json<PatchCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    authorize_author(&state.db, &session, post_id, id, Action::PartialUpdate).await?;

    let Json(payload) = payload?;

    let params = UpdateCommentParams::from_patch_dto(id, payload);

    save(&state.db, post_id, params).await
}

/// Delete a comment.
///
/// # Access Control
/// - `AuthenticatedOrReadOnly` - Requires an authenticated user
/// - `AuthorOrReadOnly` - Only the author may delete the comment
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{post_id}/comments/{id}/",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Comment not found under this post", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path((post_id, id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    authorize_author(&state.db, &session, post_id, id, Action::Destroy).await?;

    let service = CommentService::new(&state.db);

    if service.delete(post_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Comment not found".to_string()))
    }
}

/// Runs the checks shared by every mutation of an existing comment.
///
/// Order: authenticated actor (401), comment exists under the post (404), actor is the
/// author (403).
async fn authorize_author(
    db: &DatabaseConnection,
    session: &Session,
    post_id: i32,
    id: i32,
    action: Action,
) -> Result<(), AppError> {
    let actor = AuthGuard::new(db, session)
        .require_user(action, &[Permission::AuthenticatedOrReadOnly])
        .await?;

    let service = CommentService::new(db);

    let Some(comment) = service.get_by_id(post_id, id).await? else {
        return Err(AppError::NotFound("Comment not found".to_string()));
    };

    auth::check(
        Some(&actor),
        action,
        &[Permission::AuthorOrReadOnly(comment.author_id)],
    )?;

    Ok(())
}

async fn save(
    db: &DatabaseConnection,
    post_id: i32,
    params: UpdateCommentParams,
) -> Result<(StatusCode, Json<CommentDto>), AppError> {
    let service = CommentService::new(db);

    match service.update(post_id, params).await? {
        Some(comment) => Ok((StatusCode::OK, Json(comment.into_dto()))),
        None => Err(AppError::NotFound("Comment not found".to_string())),
    }
}
