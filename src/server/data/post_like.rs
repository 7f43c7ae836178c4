//! Post like repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait};

pub struct PostLikeRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostLikeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether `user_id` likes `post_id`.
    pub async fn exists(&self, post_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let like = entity::prelude::PostLike::find_by_id((post_id, user_id))
            .one(self.db)
            .await?;

        Ok(like.is_some())
    }

    /// Creates a like.
    ///
    /// # Returns
    /// - `Ok(true)` - Like inserted
    /// - `Ok(false)` - Like already existed, nothing written
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, post_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let now = Utc::now();

        let inserted = entity::prelude::PostLike::insert(entity::post_like::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::post_like::Column::PostId,
                entity::post_like::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Deletes a like.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of likes removed (0 or 1)
    pub async fn delete(&self, post_id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PostLike::delete_by_id((post_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
