//! User service for profiles and account updates.
//!
//! This module provides the `UserService` for public profiles and for changes the
//! authenticated user makes to their own account.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{follow::FollowRepository, user::UserRepository},
    error::{validation::FieldErrors, AppError},
    model::user::{UpdateProfileParams, User, UserProfile, EMAIL_TAKEN, USERNAME_TAKEN},
    service::notification::Notifier,
};

pub const USER_NOT_FOUND: &str = "User not found.";

/// Service providing business logic for user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Notifier,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `notifier` - Notifier used for profile picture emails
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection, notifier: &'a Notifier) -> Self {
        Self { db, notifier }
    }

    /// Retrieves a user's public profile with follow counts.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - Profile found
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_profile(&self, user_id: i32) -> Result<UserProfile, AppError> {
        let user = self.get_user(user_id).await?;

        let follow_repo = FollowRepository::new(self.db);
        let followers_count = follow_repo.count_followers(user_id).await?;
        let following_count = follow_repo.count_following(user_id).await?;

        Ok(UserProfile {
            user,
            followers_count,
            following_count,
        })
    }

    /// Retrieves a user or fails with `User not found.`.
    pub async fn get_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Applies changes to the authenticated user's own account.
    ///
    /// Sends the profile picture notification when the stored picture URL changes.
    ///
    /// # Arguments
    /// - `user` - The authenticated user as loaded for this request
    /// - `params` - Validated changes
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(AppError::Validation)` - New username or email taken by another account
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_me(
        &self,
        user: &User,
        params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let mut errors = FieldErrors::new();
        if let Some(username) = &params.username {
            if user_repo.username_exists(username, Some(user.id)).await? {
                errors.add("username", USERNAME_TAKEN);
            }
        }
        if let Some(email) = &params.email {
            if user_repo.email_exists(email, Some(user.id)).await? {
                errors.add("email", EMAIL_TAKEN);
            }
        }
        errors.into_result()?;

        let updated = user_repo
            .update(user.id, params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, USERNAME_TAKEN))?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        if updated.profile_pic != user.profile_pic {
            self.notifier.profile_picture_changed(&updated).await;
        }

        Ok(updated)
    }
}
