//! Follow edge factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a follow edge from `follower_id` to `following_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `follower_id` - ID of the user who follows
/// - `following_id` - ID of the user being followed
///
/// # Returns
/// - `Ok(Model)` - The created follow edge
/// - `Err(DbErr)` - Database error during insertion (including duplicate edges)
pub async fn create_follow(
    db: &DatabaseConnection,
    follower_id: i32,
    following_id: i32,
) -> Result<entity::follow::Model, DbErr> {
    entity::follow::ActiveModel {
        follower_id: ActiveValue::Set(follower_id),
        following_id: ActiveValue::Set(following_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
