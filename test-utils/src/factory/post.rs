//! Post factory for creating test post entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::post::PostFactory;
///
/// let post = PostFactory::new(&db, author.id)
///     .name("Release notes")
///     .category("News")
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    name: String,
    content: String,
    image: String,
    category: String,
    created_at: DateTime<Utc>,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Post {id}"` where id is auto-incremented
    /// - content: `"Content of post {id}"`
    /// - image, category: empty
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            name: format!("Post {}", id),
            content: format!("Content of post {}", id),
            image: String::new(),
            category: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the creation timestamp, which drives list ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the post entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created post entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            name: ActiveValue::Set(self.name),
            content: ActiveValue::Set(self.content),
            image: ActiveValue::Set(self.image),
            category: ActiveValue::Set(self.category),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values for the given author.
///
/// # Arguments
/// - `db` - Database connection
/// - `author_id` - ID of the authoring user
///
/// # Returns
/// - `Ok(Model)` - The created post entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}
