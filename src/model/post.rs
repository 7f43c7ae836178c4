use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::model::api::deserialize_string_list;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PostDto {
    pub id: i32,
    pub name: String,
    pub content: String,
    pub image: String,
    pub category: String,
    /// ID of the authoring user.
    pub author: i32,
    pub author_username: String,
    pub likes_count: u64,
    pub comments_count: u64,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for creating and updating posts, sent as JSON or multipart form data.
///
/// In multipart requests an optional `file` part is stored as the post image.
#[derive(Deserialize, Validate, ToSchema, Debug, Default)]
pub struct PostPayloadDto {
    #[validate(length(max = 150, message = "Ensure this field has no more than 150 characters."))]
    pub name: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    #[validate(length(max = 80, message = "Ensure this field has no more than 80 characters."))]
    pub category: Option<String>,
    /// Replaces the post's tags when present.
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub tag_names: Option<Vec<String>>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct PostListQuery {
    /// Case-insensitive match against post content or tag names.
    pub search: Option<String>,
    /// Case-insensitive exact category match.
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct LikeToggleDto {
    pub detail: String,
    pub liked: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
}
