use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, post::LikeToggleDto},
    server::{
        controller::post::POST_TAG, error::AppError, middleware::auth::AuthGuard,
        model::toggle::ToggleOutcome, service::like::LikeService, state::AppState,
        util::payload::PathId,
    },
};

/// Like or unlike a post.
///
/// The first call likes the post and emails its author, unless the author liked their
/// own post. The next call removes the like.
///
/// # Access Control
/// - Token authentication required
///
/// # Returns
/// - `201 Created` - `{"detail": "Post liked.", "liked": true}`
/// - `200 OK` - `{"detail": "Post unliked.", "liked": false}`
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - `Post not found.`
/// - `409 Conflict` - A concurrent request liked the post first
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/like",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 201, description = "Post liked", body = LikeToggleDto),
        (status = 200, description = "Post unliked", body = LikeToggleDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 409, description = "Concurrent duplicate like", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn toggle_like(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathId(post_id): PathId<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let outcome = LikeService::new(&state.db, &state.notifier)
        .toggle(&user, post_id)
        .await?;

    let (status, detail) = match outcome {
        ToggleOutcome::Created => (StatusCode::CREATED, "Post liked."),
        ToggleOutcome::Removed => (StatusCode::OK, "Post unliked."),
    };

    Ok((
        status,
        Json(LikeToggleDto {
            detail: detail.to_string(),
            liked: outcome.is_created(),
        }),
    ))
}
