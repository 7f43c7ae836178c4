//! Post domain models and parameters.
//!
//! Provides the hydrated post model (author name, tag names and counters) plus the
//! validated parameters for creating, updating and filtering posts.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    model::post::{PostDto, PostListQuery, PostPayloadDto},
    server::{
        error::validation::FieldErrors,
        model::user::UpdateMode,
        util::text::{non_blank, trimmed},
    },
};

const NAME_EMPTY: &str = "Post name cannot be empty.";
const CONTENT_EMPTY: &str = "Post content cannot be empty.";
const TAG_EMPTY: &str = "Tag names cannot be empty.";
const TAG_TOO_LONG: &str = "Tag names cannot be longer than 50 characters.";
const TAG_MAX_LEN: usize = 50;

/// Post with the data needed to render it.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub author_id: i32,
    pub author_username: String,
    pub name: String,
    pub content: String,
    pub image: String,
    pub category: String,
    /// Tag names ordered by name.
    pub tags: Vec<String>,
    pub likes_count: u64,
    pub comments_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            name: self.name,
            content: self.content,
            image: self.image,
            category: self.category,
            author: self.author_id,
            author_username: self.author_username,
            likes_count: self.likes_count,
            comments_count: self.comments_count,
            tags: self.tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Filters for the public post list.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl PostFilter {
    /// Blank query values are ignored.
    pub fn from_query(query: PostListQuery) -> Self {
        Self {
            search: non_blank(query.search),
            category: non_blank(query.category),
        }
    }
}

/// Validated input for a new post.
#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub author_id: i32,
    pub name: String,
    pub content: String,
    pub image: String,
    pub category: String,
    /// Normalized, deduplicated tag names.
    pub tag_names: Vec<String>,
}

impl CreatePostParams {
    /// Normalizes and validates a create request.
    ///
    /// # Arguments
    /// - `author_id` - ID of the authenticated author
    /// - `dto` - Submitted fields
    ///
    /// # Returns
    /// - `Ok(CreatePostParams)` - Input is well formed
    /// - `Err(FieldErrors)` - Name or content blank, a field too long, or a bad tag
    pub fn from_dto(author_id: i32, dto: PostPayloadDto) -> Result<Self, FieldErrors> {
        let fields = PostFields::from_dto(dto, UpdateMode::Replace)?;

        match (fields.name, fields.content) {
            (Some(name), Some(content)) => Ok(Self {
                author_id,
                name,
                content,
                image: fields.image.unwrap_or_default(),
                category: fields.category.unwrap_or_default(),
                tag_names: fields.tag_names.unwrap_or_default(),
            }),
            _ => Err(FieldErrors::non_field(NAME_EMPTY)),
        }
    }
}

/// Validated post changes; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostParams {
    pub name: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    /// When present, replaces the post's tag set.
    pub tag_names: Option<Vec<String>>,
}

impl UpdatePostParams {
    /// Normalizes and validates an update request.
    ///
    /// # Arguments
    /// - `dto` - Submitted fields
    /// - `mode` - `Replace` requires name and content
    pub fn from_dto(dto: PostPayloadDto, mode: UpdateMode) -> Result<Self, FieldErrors> {
        let fields = PostFields::from_dto(dto, mode)?;

        Ok(Self {
            name: fields.name,
            content: fields.content,
            image: fields.image,
            category: fields.category,
            tag_names: fields.tag_names,
        })
    }
}

/// Shared normalization for create and update.
struct PostFields {
    name: Option<String>,
    content: Option<String>,
    image: Option<String>,
    category: Option<String>,
    tag_names: Option<Vec<String>>,
}

impl PostFields {
    fn from_dto(dto: PostPayloadDto, mode: UpdateMode) -> Result<Self, FieldErrors> {
        let dto = PostPayloadDto {
            name: trimmed(dto.name),
            content: trimmed(dto.content),
            image: trimmed(dto.image),
            category: trimmed(dto.category),
            tag_names: dto.tag_names,
        };

        let mut errors = match dto.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };

        if is_blank_or_missing(dto.name.as_deref(), mode) {
            errors.add("name", NAME_EMPTY);
        }
        if is_blank_or_missing(dto.content.as_deref(), mode) {
            errors.add("content", CONTENT_EMPTY);
        }

        let tag_names = match dto.tag_names {
            Some(names) => match normalize_tag_names(names) {
                Ok(names) => Some(names),
                Err(tag_errors) => {
                    errors.merge(tag_errors);
                    None
                }
            },
            None => None,
        };

        errors.into_result()?;

        Ok(Self {
            name: dto.name,
            content: dto.content,
            image: dto.image,
            category: dto.category,
            tag_names,
        })
    }
}

fn is_blank_or_missing(value: Option<&str>, mode: UpdateMode) -> bool {
    match value {
        Some(value) => value.is_empty(),
        None => mode == UpdateMode::Replace,
    }
}

/// Trims tag names and removes case-insensitive duplicates, keeping the first spelling.
///
/// # Returns
/// - `Ok(Vec<String>)` - Names in submission order
/// - `Err(FieldErrors)` - A name is blank or longer than 50 characters
pub fn normalize_tag_names(names: Vec<String>) -> Result<Vec<String>, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut seen = std::collections::HashSet::new();
    let mut normalized = Vec::new();

    for name in names {
        let name = name.trim();

        if name.is_empty() {
            errors.add("tag_names", TAG_EMPTY);
            continue;
        }
        if name.chars().count() > TAG_MAX_LEN {
            errors.add("tag_names", TAG_TOO_LONG);
            continue;
        }
        if seen.insert(name.to_lowercase()) {
            normalized.push(name.to_string());
        }
    }

    errors.into_result()?;

    Ok(normalized)
}
