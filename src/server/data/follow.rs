//! Follow edge repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::server::model::user::User;

pub struct FollowRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FollowRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether `follower_id` follows `following_id`.
    pub async fn exists(&self, follower_id: i32, following_id: i32) -> Result<bool, DbErr> {
        let edge = entity::prelude::Follow::find_by_id((follower_id, following_id))
            .one(self.db)
            .await?;

        Ok(edge.is_some())
    }

    /// Creates a follow edge.
    ///
    /// # Returns
    /// - `Ok(true)` - Edge inserted
    /// - `Ok(false)` - Edge already existed, nothing written
    /// - `Err(DbErr)` - Database error, including the self-follow check constraint
    pub async fn create(&self, follower_id: i32, following_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::Follow::insert(entity::follow::ActiveModel {
            follower_id: ActiveValue::Set(follower_id),
            following_id: ActiveValue::Set(following_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::follow::Column::FollowerId,
                entity::follow::Column::FollowingId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Deletes a follow edge.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of edges removed (0 or 1)
    pub async fn delete(&self, follower_id: i32, following_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Follow::delete_by_id((follower_id, following_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts users following `user_id`.
    pub async fn count_followers(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowingId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Counts users `user_id` follows.
    pub async fn count_following(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Gets users following `user_id`, ordered by username.
    pub async fn get_followers(&self, user_id: i32) -> Result<Vec<User>, DbErr> {
        let follower_ids = entity::prelude::Follow::find()
            .select_only()
            .column(entity::follow::Column::FollowerId)
            .filter(entity::follow::Column::FollowingId.eq(user_id))
            .into_query();

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.in_subquery(follower_ids))
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Gets users `user_id` follows, ordered by username.
    pub async fn get_following(&self, user_id: i32) -> Result<Vec<User>, DbErr> {
        let following_ids = entity::prelude::Follow::find()
            .select_only()
            .column(entity::follow::Column::FollowingId)
            .filter(entity::follow::Column::FollowerId.eq(user_id))
            .into_query();

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.in_subquery(following_ids))
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Gets the non-empty email addresses of everyone following `user_id`.
    pub async fn get_follower_emails(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let followers = self.get_followers(user_id).await?;

        Ok(followers
            .into_iter()
            .map(|user| user.email)
            .filter(|email| !email.trim().is_empty())
            .collect())
    }
}
