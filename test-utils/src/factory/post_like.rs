//! Post like factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a like on `post_id` by `user_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `post_id` - ID of the liked post
/// - `user_id` - ID of the liking user
///
/// # Returns
/// - `Ok(Model)` - The created like
/// - `Err(DbErr)` - Database error during insertion (including duplicate likes)
pub async fn create_like(
    db: &DatabaseConnection,
    post_id: i32,
    user_id: i32,
) -> Result<entity::post_like::Model, DbErr> {
    let now = Utc::now();

    entity::post_like::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
