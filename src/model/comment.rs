use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CommentDto {
    pub id: i32,
    /// ID of the post the comment belongs to.
    pub post: i32,
    /// ID of the authoring user.
    pub author: i32,
    pub author_username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct CommentPayloadDto {
    pub content: Option<String>,
}
