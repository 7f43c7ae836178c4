use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{FollowToggleDto, UserSummaryDto},
    },
    server::{
        controller::user::USER_TAG, error::AppError, middleware::auth::AuthGuard,
        service::follow::FollowService, state::AppState,
        util::payload::PathId,
    },
};

/// Follow or unfollow a user.
///
/// The first call follows the user and emails them; the next call unfollows. Following
/// yourself is rejected.
///
/// # Access Control
/// - Token authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection and notifier
/// - `headers` - Request headers carrying the token
/// - `user_id` - ID of the user to follow or unfollow
///
/// # Returns
/// - `201 Created` - Now following, `following: true`
/// - `200 OK` - Unfollowed, `following: false`
/// - `400 Bad Request` - Attempted to follow yourself
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - `User not found.`
/// - `409 Conflict` - A concurrent request followed first
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/follow",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user to follow or unfollow")
    ),
    responses(
        (status = 201, description = "Followed", body = FollowToggleDto),
        (status = 200, description = "Unfollowed", body = FollowToggleDto),
        (status = 400, description = "Cannot follow yourself", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Concurrent duplicate follow", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn toggle_follow(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathId(user_id): PathId<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let toggle = FollowService::new(&state.db, &state.notifier)
        .toggle(&user, user_id)
        .await?;

    let status = if toggle.outcome.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(toggle.into_dto())))
}

/// List users following a user, ordered by username.
///
/// # Access Control
/// - Token authentication required
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/followers",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Followers", body = Vec<UserSummaryDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn get_followers(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathId(user_id): PathId<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;

    let users = FollowService::new(&state.db, &state.notifier)
        .followers(user_id)
        .await?;

    let users: Vec<UserSummaryDto> = users.into_iter().map(|u| u.into_summary_dto()).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// List users a user follows, ordered by username.
///
/// # Access Control
/// - Token authentication required
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/following",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Followed users", body = Vec<UserSummaryDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn get_following(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathId(user_id): PathId<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;

    let users = FollowService::new(&state.db, &state.notifier)
        .following(user_id)
        .await?;

    let users: Vec<UserSummaryDto> = users.into_iter().map(|u| u.into_summary_dto()).collect();

    Ok((StatusCode::OK, Json(users)))
}
