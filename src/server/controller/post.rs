use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DetailDto, ErrorDto},
        post::{PostDto, PostListQuery, PostPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            post::{CreatePostParams, PostFilter, UpdatePostParams},
            user::UpdateMode,
        },
        service::{post::PostService, upload::UploadService},
        state::AppState,
        util::payload::{FormPayload, PathId},
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// List posts, newest first.
///
/// `search` matches post content or any tag name, case-insensitively. `category`
/// must match the post category exactly, ignoring case. A post matching through both
/// its content and a tag is returned once.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `search` and `category` filters
///
/// # Returns
/// - `200 OK` - Matching posts
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    params(PostListQuery),
    responses(
        (status = 200, description = "Matching posts", body = Vec<PostDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    Query(query): Query<PostListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db, &state.notifier)
        .get_all(PostFilter::from_query(query))
        .await?;

    let posts: Vec<PostDto> = posts.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(posts)))
}

/// Publish a post.
///
/// Accepts JSON or multipart form data. In multipart requests a `file` part is
/// validated as an image, stored and used as the post image. Every follower of the
/// author is emailed about the new post.
///
/// # Access Control
/// - Token authentication required; the requester becomes the author
///
/// # Returns
/// - `201 Created` - The new post
/// - `400 Bad Request` - Name or content blank, a field too long, bad tag or image
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database or filesystem error
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body = PostPayloadDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: FormPayload,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let mut params = CreatePostParams::from_dto(user.id, payload.parse::<PostPayloadDto>()?)?;

    if let Some(file) = &payload.file {
        params.image = UploadService::new(&state.media)
            .store_image(Some(file))
            .await?;
    }

    let post = PostService::new(&state.db, &state.notifier)
        .create(&user, params)
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// List posts by users the requester follows, newest first.
///
/// # Access Control
/// - Token authentication required
#[utoipa::path(
    get,
    path = "/api/posts/following",
    tag = POST_TAG,
    responses(
        (status = 200, description = "Feed of followed authors", body = Vec<PostDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn get_following_posts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let posts = PostService::new(&state.db, &state.notifier)
        .get_following_feed(&user)
        .await?;

    let posts: Vec<PostDto> = posts.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(posts)))
}

#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    PathId(post_id): PathId<i32>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db, &state.notifier)
        .get_by_id(post_id)
        .await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Replace a post. Name and content are required.
///
/// # Access Control
/// - Token authentication required
/// - Only the author may edit the post
///
/// # Returns
/// - `200 OK` - Updated post
/// - `400 Bad Request` - Invalid post data
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - `Only the owner can edit this post.`
/// - `404 Not Found` - `Post not found.`
#[utoipa::path(
    put,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = PostPayloadDto,
    responses(
        (status = 200, description = "Updated post", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn replace_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathId(post_id): PathId<i32>,
    payload: FormPayload,
) -> Result<impl IntoResponse, AppError> {
    update_post(state, headers, post_id, payload, UpdateMode::Replace).await
}

/// Partially update a post. `tag_names`, when present, replaces the tag set.
#[utoipa::path(
    patch,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = PostPayloadDto,
    responses(
        (status = 200, description = "Updated post", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn patch_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathId(post_id): PathId<i32>,
    payload: FormPayload,
) -> Result<impl IntoResponse, AppError> {
    update_post(state, headers, post_id, payload, UpdateMode::Partial).await
}

async fn update_post(
    state: AppState,
    headers: HeaderMap,
    post_id: i32,
    payload: FormPayload,
    mode: UpdateMode,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let mut params = UpdatePostParams::from_dto(payload.parse::<PostPayloadDto>()?, mode)?;

    let service = PostService::new(&state.db, &state.notifier);

    // Ownership is checked before a new image is written to disk.
    if let Some(file) = &payload.file {
        service.get_owned(&user, post_id).await?;
        params.image = Some(
            UploadService::new(&state.media)
                .store_image(Some(file))
                .await?,
        );
    }

    let post = service.update(&user, post_id, params).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Delete a post with its comments, likes and tag links.
///
/// # Access Control
/// - Token authentication required
/// - Only the author may delete the post
///
/// # Returns
/// - `200 OK` - `{"detail": "Post deleted."}`
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - `Only the owner can delete this post.`
/// - `404 Not Found` - `Post not found.`
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post deleted", body = DetailDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathId(post_id): PathId<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    PostService::new(&state.db, &state.notifier)
        .delete(&user, post_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(DetailDto {
            detail: "Post deleted.".to_string(),
        }),
    ))
}
