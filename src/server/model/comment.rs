//! Comment domain model and content validation.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, CommentPayloadDto},
    server::{error::validation::FieldErrors, util::text::non_blank},
};

const CONTENT_EMPTY: &str = "Comment content cannot be empty.";

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub author_id: i32,
    pub author_username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Converts an entity model together with its author's username.
    pub fn from_entity(entity: entity::comment::Model, author_username: String) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            author_id: entity.author_id,
            author_username,
            content: entity.content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            post: self.post_id,
            author: self.author_id,
            author_username: self.author_username,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Extracts trimmed, non-blank comment content.
///
/// Both create and update require content, so `PUT` and `PATCH` validate alike.
pub fn comment_content(dto: CommentPayloadDto) -> Result<String, FieldErrors> {
    non_blank(dto.content).ok_or_else(|| FieldErrors::single("content", CONTENT_EMPTY))
}
