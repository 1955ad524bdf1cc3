use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, group::GroupDto},
    server::{
        error::AppError,
        middleware::auth::{Action, AuthGuard, Permission},
        service::group::GroupService,
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// List all groups.
///
/// Groups are read-only and open to anonymous users. The list is never paginated.
#[utoipa::path(
    get,
    path = "/api/v1/groups/",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "All groups ordered by id", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(Action::List, &[Permission::AuthenticatedOrReadOnly])
        .await?;

    let service = GroupService::new(&state.db);

    let groups = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(groups.into_iter().map(|g| g.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a group by ID.
#[utoipa::path(
    get,
    path = "/api/v1/groups/{id}/",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group details", body = GroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(Action::Retrieve, &[Permission::AuthenticatedOrReadOnly])
        .await?;

    let service = GroupService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(group) => Ok((StatusCode::OK, Json(group.into_dto()))),
        None => Err(AppError::NotFound("Group not found".to_string())),
    }
}
