//! Follow toggling and follower listings.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{follow::FollowRepository, user::UserRepository},
    error::{validation::FieldErrors, AppError},
    model::{follow::FollowToggle, toggle::ToggleOutcome, user::User},
    service::{notification::Notifier, user::USER_NOT_FOUND},
};

const SELF_FOLLOW: &str = "You cannot follow yourself.";
const ALREADY_FOLLOWING: &str = "You are already following this user.";

pub struct FollowService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Notifier,
}

impl<'a> FollowService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a Notifier) -> Self {
        Self { db, notifier }
    }

    /// Follows `target_id` if `follower` does not follow them yet, otherwise unfollows.
    ///
    /// The check and the write share a transaction. The followed user is notified only
    /// when an edge is created, after commit.
    ///
    /// # Returns
    /// - `Ok(FollowToggle)` - Edge created or removed
    /// - `Err(AppError::Validation)` - `follower` and target are the same user
    /// - `Err(AppError::NotFound)` - No user with `target_id`
    /// - `Err(AppError::Conflict)` - A concurrent request created the edge first
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn toggle(&self, follower: &User, target_id: i32) -> Result<FollowToggle, AppError> {
        if follower.id == target_id {
            return Err(FieldErrors::non_field(SELF_FOLLOW).into());
        }

        let txn = self.db.begin().await?;

        let target = UserRepository::new(&txn)
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        let follow_repo = FollowRepository::new(&txn);
        let outcome = if follow_repo.exists(follower.id, target.id).await? {
            follow_repo.delete(follower.id, target.id).await?;
            ToggleOutcome::Removed
        } else {
            add_follow(&txn, follower.id, target.id).await?;
            ToggleOutcome::Created
        };

        txn.commit().await?;

        if outcome.is_created() {
            self.notifier.user_followed(follower, &target).await;
        }

        Ok(FollowToggle {
            outcome,
            follower: follower.clone(),
            target,
        })
    }

    /// Gets users following `user_id`.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Followers ordered by username
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn followers(&self, user_id: i32) -> Result<Vec<User>, AppError> {
        self.ensure_user_exists(user_id).await?;

        Ok(FollowRepository::new(self.db).get_followers(user_id).await?)
    }

    /// Gets users `user_id` follows.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Followed users ordered by username
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn following(&self, user_id: i32) -> Result<Vec<User>, AppError> {
        self.ensure_user_exists(user_id).await?;

        Ok(FollowRepository::new(self.db).get_following(user_id).await?)
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), AppError> {
        match UserRepository::new(self.db).find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(USER_NOT_FOUND.to_string())),
        }
    }
}

/// Inserts a follow edge that the caller found missing.
///
/// An edge written in between by a concurrent request is reported as a conflict.
pub(crate) async fn add_follow<C: ConnectionTrait>(
    db: &C,
    follower_id: i32,
    following_id: i32,
) -> Result<(), AppError> {
    if !FollowRepository::new(db)
        .create(follower_id, following_id)
        .await?
    {
        return Err(AppError::Conflict(ALREADY_FOLLOWING.to_string()));
    }

    Ok(())
}
