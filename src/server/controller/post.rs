use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        post::{
            CreatePostDto, PaginatedPostsDto, PatchPostDto, PostDto, PostListDto, UpdatePostDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{self, Action, AuthGuard, Permission},
        model::post::{CreatePostParams, UpdatePostParams},
        service::post::PostService,
        state::AppState,
        util::pagination::{request_url, LimitOffset, PaginationQuery},
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// List posts, newest first.
///
/// Returns the bare list of all posts unless both `limit` and `offset` are given as
/// valid integers, in which case the matching slice is wrapped in a
/// `{count, next, previous, results}` envelope with absolute page links.
///
/// # Access Control
/// - `AuthenticatedOrReadOnly` - Open to anonymous users
///
/// # Arguments
/// - `state` - Application state containing the database connection and application URL
/// - `session` - User's session for authentication
/// - `uri` - Original request URI, used to build page links
/// - `query` - Optional `limit` and `offset`
///
/// # Returns
/// - `200 OK` - Bare list or paginated envelope
/// - `500 Internal Server Error` - Database error or invalid application URL
#[utoipa::path(
    get,
    path = "/api/v1/posts/",
    tag = POST_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Page size; paginates only together with offset"),
        ("offset" = Option<u64>, Query, description = "Number of posts to skip; paginates only together with limit")
    ),
    responses(
        (status = 200, description = "Posts, either bare or paginated", body = PostListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(Action::List, &[Permission::AuthenticatedOrReadOnly])
        .await?;

    let service = PostService::new(&state.db);

    let Some(page) = LimitOffset::from_query(&query) else {
        let posts = service.get_all().await?;

        return Ok((
            StatusCode::OK,
            Json(PostListDto::List(
                posts.into_iter().map(|p| p.into_dto()).collect(),
            )),
        ));
    };

    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let url = request_url(&state.app_url, path_and_query)?;

    let paginated = service.get_paginated(page).await?;

    Ok((
        StatusCode::OK,
        Json(PostListDto::Paginated(PaginatedPostsDto {
            count: paginated.total,
            next: page.next_link(&url, paginated.total),
            previous: page.previous_link(&url),
            results: paginated.posts.into_iter().map(|p| p.into_dto()).collect(),
        })),
    ))
}

/// Create a new post.
///
/// The acting user becomes the author; `author`, `id` and `created` in the body are ignored.
///
/// # Access Control
/// - `AuthenticatedOrReadOnly` - Requires an authenticated user
///
/// # Returns
/// - `201 Created` - The created post
/// - `400 Bad Request` - Blank content, unknown group or malformed body
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/posts/",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Successfully created post", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreatePostDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require_user(Action::Create, &[Permission::AuthenticatedOrReadOnly])
        .await?;

    let Json(payload) = payload?;

    let service = PostService::new(&state.db);

    // Convert DTO to server model, stamping the actor as author
    let params = CreatePostParams::from_dto(actor.id, payload);

    let post = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Get a post by ID.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}/",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post details", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(Action::Retrieve, &[Permission::AuthenticatedOrReadOnly])
        .await?;

    let service = PostService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(post) => Ok((StatusCode::OK, Json(post.into_dto()))),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// Replace a post's content and optionally its group.
///
/// `content` is required. `group: null` removes the post from its group, an omitted
/// `group` keeps the current one.
///
/// # Access Control
/// - `AuthenticatedOrReadOnly` - Requires an authenticated user
/// - `AuthorOrReadOnly` - Only the author may update the post
///
/// # Returns
/// - `200 OK` - The updated post
/// - `400 Bad Request` - Blank content, unknown group or malformed body
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not the author
/// - `404 Not Found` - Post not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}/",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Successfully updated post", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    payload: Result<Json<UpdatePostDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    authorize_author(&state.db, &session, id, Action::Update).await?;

    let Json(payload) = payload?;

    let params = UpdatePostParams::from_update_dto(id, payload);

    save(&state.db, params).await
}

/// Partially update a post.
///
/// Only the fields present in the body are changed.
///
/// # Access Control
/// - `AuthenticatedOrReadOnly` - Requires an authenticated user
/// - `AuthorOrReadOnly` - Only the author may update the post
#[utoipa::path(
    patch,
    path = "/api/v1/posts/{id}/",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    request_body = PatchPostDto,
    responses(
        (status = 200, description = "Successfully updated post", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_post(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    payload: Result<Json<PatchPostDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    authorize_author(&state.db, &session, id, Action::PartialUpdate).await?;

    let Json(payload) = payload?;

    let params = UpdatePostParams::from_patch_dto(id, payload);

    save(&state.db, params).await
}

/// Delete a post and its comments.
///
/// # Access Control
/// - `AuthenticatedOrReadOnly` - Requires an authenticated user
/// - `AuthorOrReadOnly` - Only the author may delete the post
///
/// # Returns
/// - `204 No Content` - Successfully deleted post
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not the author
/// - `404 Not Found` - Post not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}/",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted post"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    authorize_author(&state.db, &session, id, Action::Destroy).await?;

    let service = PostService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Post not found".to_string()))
    }
}

/// Runs the checks shared by every mutation of an existing post.
///
/// Order: authenticated actor (401), post exists (404), actor is the author (403).
async fn authorize_author(
    db: &DatabaseConnection,
    session: &Session,
    id: i32,
    action: Action,
) -> Result<(), AppError> {
    let actor = AuthGuard::new(db, session)
        .require_user(action, &[Permission::AuthenticatedOrReadOnly])
        .await?;

    let service = PostService::new(db);

    let Some(post) = service.get_by_id(id).await? else {
        return Err(AppError::NotFound("Post not found".to_string()));
    };

    auth::check(
        Some(&actor),
        action,
        &[Permission::AuthorOrReadOnly(post.author_id)],
    )?;

    Ok(())
}

async fn save(
    db: &DatabaseConnection,
    params: UpdatePostParams,
) -> Result<(StatusCode, Json<PostDto>), AppError> {
    let service = PostService::new(db);

    match service.update(params).await? {
        Some(post) => Ok((StatusCode::OK, Json(post.into_dto()))),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}
