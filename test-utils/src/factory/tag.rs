//! Tag factory and post tagging helper.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a tag with the given name.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Tag name, stored as given
///
/// # Returns
/// - `Ok(Model)` - The created tag entity
/// - `Err(DbErr)` - Database error during insertion (including duplicate names)
pub async fn create_tag(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    let now = Utc::now();
    let name = name.into();

    entity::tag::ActiveModel {
        normalized_name: ActiveValue::Set(name.to_lowercase()),
        name: ActiveValue::Set(name),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Attaches an existing tag to an existing post.
///
/// # Arguments
/// - `db` - Database connection
/// - `post_id` - ID of the post
/// - `tag_id` - ID of the tag
///
/// # Returns
/// - `Ok(Model)` - The created post-tag link
/// - `Err(DbErr)` - Database error during insertion
pub async fn tag_post(
    db: &DatabaseConnection,
    post_id: i32,
    tag_id: i32,
) -> Result<entity::post_tag::Model, DbErr> {
    entity::post_tag::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        tag_id: ActiveValue::Set(tag_id),
    }
    .insert(db)
    .await
}
