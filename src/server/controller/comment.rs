use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DetailDto, ErrorDto},
        comment::{CommentDto, CommentPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::comment::comment_content,
        service::comment::CommentService,
        state::AppState,
        util::payload::{JsonBody, PathId},
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List a post's comments, oldest first.
///
/// # Returns
/// - `200 OK` - Comments on the post
/// - `404 Not Found` - `Post not found.`
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Comments on the post", body = Vec<CommentDto>),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post_comments(
    State(state): State<AppState>,
    PathId(post_id): PathId<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db, &state.notifier)
        .get_by_post(post_id)
        .await?;

    let comments: Vec<CommentDto> = comments.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(comments)))
}

/// Comment on a post.
///
/// The post's author is emailed about the comment unless they wrote it themselves.
///
/// # Access Control
/// - Token authentication required; the requester becomes the author
///
/// # Arguments
/// - `state` - Application state containing the database connection and notifier
/// - `headers` - Request headers carrying the token
/// - `post_id` - ID of the post to comment on
/// - `payload` - Comment content
///
/// # Returns
/// - `201 Created` - The new comment
/// - `400 Bad Request` - Content missing or blank
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - `Post not found.`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = CommentPayloadDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathId(post_id): PathId<i32>,
    JsonBody(payload): JsonBody<CommentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let content = comment_content(payload)?;

    let comment = CommentService::new(&state.db, &state.notifier)
        .create(&user, post_id, content)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment", body = CommentDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment(
    State(state): State<AppState>,
    PathId(comment_id): PathId<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db, &state.notifier)
        .get_by_id(comment_id)
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Replace a comment's content.
///
/// `PUT` and `PATCH` behave the same since content is the only editable field.
///
/// # Access Control
/// - Token authentication required
/// - Only the comment's author may edit it
///
/// # Returns
/// - `200 OK` - Updated comment
/// - `400 Bad Request` - Content missing or blank
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - `Only the owner can edit this comment.`
/// - `404 Not Found` - `Comment not found.`
#[utoipa::path(
    put,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    request_body = CommentPayloadDto,
    responses(
        (status = 200, description = "Updated comment", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn replace_comment(
    state: State<AppState>,
    headers: HeaderMap,
    comment_id: PathId<i32>,
    payload: JsonBody<CommentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    update_comment(state, headers, comment_id, payload).await
}

#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    request_body = CommentPayloadDto,
    responses(
        (status = 200, description = "Updated comment", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn patch_comment(
    state: State<AppState>,
    headers: HeaderMap,
    comment_id: PathId<i32>,
    payload: JsonBody<CommentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    update_comment(state, headers, comment_id, payload).await
}

async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathId(comment_id): PathId<i32>,
    JsonBody(payload): JsonBody<CommentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let content = comment_content(payload)?;

    let comment = CommentService::new(&state.db, &state.notifier)
        .update(&user, comment_id, content)
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment.
///
/// # Access Control
/// - Token authentication required
/// - Only the comment's author may delete it
///
/// # Returns
/// - `200 OK` - `{"detail": "Comment deleted."}`
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - `Only the owner can delete this comment.`
/// - `404 Not Found` - `Comment not found.`
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = DetailDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathId(comment_id): PathId<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    CommentService::new(&state.db, &state.notifier)
        .delete(&user, comment_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(DetailDto {
            detail: "Comment deleted.".to_string(),
        }),
    ))
}
