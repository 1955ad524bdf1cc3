use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, PatchCommentDto, UpdateCommentDto},
        follow::{CreateFollowDto, FollowDto},
        group::GroupDto,
        post::{
            CreatePostDto, PaginatedPostsDto, PatchPostDto, PostDto, PostListDto, UpdatePostDto,
        },
        user::UserDto,
    },
    server::{
        controller::{
            auth::{self, get_user, logout},
            comment::{
                self, create_comment, delete_comment, get_comment_by_id, get_comments,
                patch_comment, update_comment,
            },
            follow::{
                self, create_follow, delete_follow, get_follow_by_id, get_follows,
                get_subscriptions,
            },
            group::{self, get_group_by_id, get_groups},
            post::{
                self, create_post, delete_post, get_post_by_id, get_posts, patch_post, update_post,
            },
        },
        state::AppState,
    },
};

/// OpenAPI document covering every registered route.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Yatube API",
        version = "1.0.0",
        description = "Social blogging API with groups, posts, comments and follow relationships"
    ),
    paths(
        auth::get_user,
        auth::logout,
        group::get_groups,
        group::get_group_by_id,
        post::get_posts,
        post::create_post,
        post::get_post_by_id,
        post::update_post,
        post::patch_post,
        post::delete_post,
        comment::get_comments,
        comment::create_comment,
        comment::get_comment_by_id,
        comment::update_comment,
        comment::patch_comment,
        comment::delete_comment,
        follow::get_follows,
        follow::get_subscriptions,
        follow::create_follow,
        follow::get_follow_by_id,
        follow::delete_follow,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        GroupDto,
        PostDto,
        CreatePostDto,
        UpdatePostDto,
        PatchPostDto,
        PaginatedPostsDto,
        PostListDto,
        CommentDto,
        CreateCommentDto,
        UpdateCommentDto,
        PatchCommentDto,
        FollowDto,
        CreateFollowDto,
    )),
    tags(
        (name = "auth", description = "Current session"),
        (name = "group", description = "Read-only community groups"),
        (name = "post", description = "Posts, paginated with limit/offset"),
        (name = "comment", description = "Comments nested under posts"),
        (name = "follow", description = "Follow relationships of the current user")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/user", get(get_user))
        .route("/api/auth/logout", get(logout))
        .route("/api/v1/groups/", get(get_groups))
        .route("/api/v1/groups/{id}/", get(get_group_by_id))
        .route("/api/v1/posts/", get(get_posts).post(create_post))
        .route(
            "/api/v1/posts/{id}/",
            get(get_post_by_id)
                .put(update_post)
                .patch(patch_post)
                .delete(delete_post),
        )
        .route(
            "/api/v1/posts/{post_id}/comments/",
            get(get_comments).post(create_comment),
        )
        .route(
            "/api/v1/posts/{post_id}/comments/{id}/",
            get(get_comment_by_id)
                .put(update_comment)
                .patch(patch_comment)
                .delete(delete_comment),
        )
        .route("/api/v1/follow/", get(get_follows).post(create_follow))
        .route("/api/v1/follow/subscriptions/", get(get_subscriptions))
        .route(
            "/api/v1/follow/{id}/",
            get(get_follow_by_id).delete(delete_follow),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
