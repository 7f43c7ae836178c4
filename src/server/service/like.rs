//! Post like toggling.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{post::PostRepository, post_like::PostLikeRepository, user::UserRepository},
    error::AppError,
    model::{toggle::ToggleOutcome, user::User},
    service::{notification::Notifier, post::POST_NOT_FOUND},
};

const ALREADY_LIKED: &str = "You have already liked this post.";

pub struct LikeService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Notifier,
}

impl<'a> LikeService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a Notifier) -> Self {
        Self { db, notifier }
    }

    /// Likes `post_id` if `user` has not liked it yet, otherwise removes the like.
    ///
    /// Liking one's own post is allowed and sends no email.
    ///
    /// # Returns
    /// - `Ok(ToggleOutcome)` - Like created or removed
    /// - `Err(AppError::NotFound)` - No post with that ID
    /// - `Err(AppError::Conflict)` - A concurrent request created the like first
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn toggle(&self, user: &User, post_id: i32) -> Result<ToggleOutcome, AppError> {
        let txn = self.db.begin().await?;

        let post = PostRepository::new(&txn)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))?;

        let like_repo = PostLikeRepository::new(&txn);
        let outcome = if like_repo.exists(post.id, user.id).await? {
            like_repo.delete(post.id, user.id).await?;
            ToggleOutcome::Removed
        } else {
            add_like(&txn, post.id, user.id).await?;
            ToggleOutcome::Created
        };

        txn.commit().await?;

        if outcome.is_created() && post.author_id != user.id {
            match UserRepository::new(self.db).find_by_id(post.author_id).await {
                Ok(Some(author)) => self.notifier.post_liked(user, &post, &author).await,
                Ok(None) => {}
                Err(e) => tracing::warn!(
                    post_id = post.id,
                    "Skipping like notification, failed to load post author: {}",
                    e
                ),
            }
        }

        Ok(outcome)
    }
}

/// Inserts a like that the caller found missing.
///
/// A like written in between by a concurrent request is reported as a conflict.
pub(crate) async fn add_like<C: ConnectionTrait>(
    db: &C,
    post_id: i32,
    user_id: i32,
) -> Result<(), AppError> {
    if !PostLikeRepository::new(db).create(post_id, user_id).await? {
        return Err(AppError::Conflict(ALREADY_LIKED.to_string()));
    }

    Ok(())
}
