use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, post::TagDto},
    server::{
        controller::post::POST_TAG, error::AppError, service::tag::TagService, state::AppState,
    },
};

/// List every tag, ordered by name.
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = POST_TAG,
    responses(
        (status = 200, description = "All tags", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = TagService::new(&state.db).get_all().await?;

    let tags: Vec<TagDto> = tags.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(tags)))
}
