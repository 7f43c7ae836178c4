//! Post service for listing, publishing and editing posts.
//!
//! Edits and deletes are limited to the post's author. Publishing a post emails every
//! follower of the author once the post is stored.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{follow::FollowRepository, post::PostRepository, user::UserRepository},
    error::AppError,
    model::{
        post::{CreatePostParams, Post, PostFilter, UpdatePostParams},
        user::User,
    },
    service::{notification::Notifier, user::USER_NOT_FOUND},
};

pub const POST_NOT_FOUND: &str = "Post not found.";
const EDIT_FORBIDDEN: &str = "Only the owner can edit this post.";
const DELETE_FORBIDDEN: &str = "Only the owner can delete this post.";

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Notifier,
}

impl<'a> PostService<'a> {
    /// Creates a new PostService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `notifier` - Notifier used for new post emails
    pub fn new(db: &'a DatabaseConnection, notifier: &'a Notifier) -> Self {
        Self { db, notifier }
    }

    /// Lists posts matching `filter`, newest first.
    pub async fn get_all(&self, filter: PostFilter) -> Result<Vec<Post>, AppError> {
        Ok(PostRepository::new(self.db).get_all(&filter).await?)
    }

    /// Gets a post or fails with `Post not found.`.
    pub async fn get_by_id(&self, post_id: i32) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))
    }

    /// Publishes a post and emails the author's followers.
    ///
    /// The post and its tags are written in one transaction; followers are emailed
    /// after commit. A failure to load the followers is logged and skips the email.
    ///
    /// # Arguments
    /// - `author` - The authenticated user
    /// - `params` - Validated post data, `author_id` matching `author`
    ///
    /// # Returns
    /// - `Ok(Post)` - The created post
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, author: &User, params: CreatePostParams) -> Result<Post, AppError> {
        let txn = self.db.begin().await?;
        let post = PostRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        match FollowRepository::new(self.db)
            .get_follower_emails(author.id)
            .await
        {
            Ok(follower_emails) => {
                self.notifier
                    .post_published(author, &post, &follower_emails)
                    .await;
            }
            Err(e) => tracing::warn!(
                post_id = post.id,
                "Skipping new post notification, failed to load followers: {}",
                e
            ),
        }

        Ok(post)
    }

    /// Gets a post that `user` may edit.
    ///
    /// # Returns
    /// - `Ok(Post)` - `user` is the author
    /// - `Err(AppError::NotFound)` - No post with that ID
    /// - `Err(AppError::Forbidden)` - `Only the owner can edit this post.`
    pub async fn get_owned(&self, user: &User, post_id: i32) -> Result<Post, AppError> {
        let post = self.get_by_id(post_id).await?;
        if post.author_id != user.id {
            return Err(AppError::Forbidden(EDIT_FORBIDDEN.to_string()));
        }

        Ok(post)
    }

    /// Updates a post owned by `user`.
    ///
    /// # Returns
    /// - `Ok(Post)` - The updated post
    /// - `Err(AppError::NotFound)` - No post with that ID
    /// - `Err(AppError::Forbidden)` - `user` is not the author
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        user: &User,
        post_id: i32,
        params: UpdatePostParams,
    ) -> Result<Post, AppError> {
        let post = self.get_owned(user, post_id).await?;

        let txn = self.db.begin().await?;
        let updated = PostRepository::new(&txn).update(post.id, params).await?;
        txn.commit().await?;

        updated.ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))
    }

    /// Deletes a post owned by `user` along with its comments, likes and tag links.
    ///
    /// # Returns
    /// - `Ok(())` - Post deleted
    /// - `Err(AppError::NotFound)` - No post with that ID
    /// - `Err(AppError::Forbidden)` - `user` is not the author
    pub async fn delete(&self, user: &User, post_id: i32) -> Result<(), AppError> {
        let post = self.get_by_id(post_id).await?;
        if post.author_id != user.id {
            return Err(AppError::Forbidden(DELETE_FORBIDDEN.to_string()));
        }

        PostRepository::new(self.db).delete(post.id).await?;

        Ok(())
    }

    /// Lists posts written by `user_id`, newest first.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_by_author(&self, user_id: i32) -> Result<Vec<Post>, AppError> {
        self.ensure_user_exists(user_id).await?;

        Ok(PostRepository::new(self.db).get_by_author(user_id).await?)
    }

    /// Lists posts liked by `user_id`, newest first.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_liked_by(&self, user_id: i32) -> Result<Vec<Post>, AppError> {
        self.ensure_user_exists(user_id).await?;

        Ok(PostRepository::new(self.db).get_liked_by(user_id).await?)
    }

    /// Lists posts by authors `user` follows, newest first.
    pub async fn get_following_feed(&self, user: &User) -> Result<Vec<Post>, AppError> {
        Ok(PostRepository::new(self.db)
            .get_by_followed_authors(user.id)
            .await?)
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), AppError> {
        match UserRepository::new(self.db).find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(USER_NOT_FOUND.to_string())),
        }
    }
}
