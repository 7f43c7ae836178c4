use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, upload::UploadDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::upload::UploadService,
        state::AppState, util::payload::FormPayload,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Upload an image.
///
/// Expects multipart form data with the image in a `file` part. Only `image/*` content
/// under 5 MiB is accepted. The stored file is served under the media URL.
///
/// # Access Control
/// - Token authentication required
///
/// # Returns
/// - `201 Created` - Absolute URL of the stored image
/// - `400 Bad Request` - Missing file, not an image, or too large
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Filesystem error
#[utoipa::path(
    post,
    path = "/api/uploads/image",
    tag = UPLOAD_TAG,
    request_body(content_type = "multipart/form-data", description = "Image in a `file` part"),
    responses(
        (status = 201, description = "Image stored", body = UploadDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: FormPayload,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;

    let url = UploadService::new(&state.media)
        .store_image(payload.file.as_ref())
        .await?;

    Ok((StatusCode::CREATED, Json(UploadDto { url })))
}
