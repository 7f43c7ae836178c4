use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, post::PostDto, user::UserProfileDto},
    server::{
        error::AppError,
        service::{post::PostService, user::UserService},
        state::AppState,
        util::payload::PathId,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get a user's public profile.
///
/// Returns the username, display name, bio, profile picture and follow counts. Email
/// and phone number are never included. No authentication required.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - ID of the user to look up
///
/// # Returns
/// - `200 OK` - Public profile
/// - `404 Not Found` - `User not found.`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Public profile", body = UserProfileDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_profile(
    State(state): State<AppState>,
    PathId(user_id): PathId<i32>,
) -> Result<impl IntoResponse, AppError> {
    let profile = UserService::new(&state.db, &state.notifier)
        .get_profile(user_id)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// List posts written by a user, newest first.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/posts",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Posts by the user", body = Vec<PostDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_posts(
    State(state): State<AppState>,
    PathId(user_id): PathId<i32>,
) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db, &state.notifier)
        .get_by_author(user_id)
        .await?;

    let posts: Vec<PostDto> = posts.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(posts)))
}

/// List posts a user has liked, newest first.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/liked-posts",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Posts liked by the user", body = Vec<PostDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_liked_posts(
    State(state): State<AppState>,
    PathId(user_id): PathId<i32>,
) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db, &state.notifier)
        .get_liked_by(user_id)
        .await?;

    let posts: Vec<PostDto> = posts.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(posts)))
}
