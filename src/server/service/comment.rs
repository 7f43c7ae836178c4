//! Comment service.
//!
//! Anyone may read comments; writing requires authentication and editing or deleting
//! is limited to the comment's author.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository, user::UserRepository},
    error::AppError,
    model::{comment::Comment, user::User},
    service::{notification::Notifier, post::POST_NOT_FOUND},
};

const COMMENT_NOT_FOUND: &str = "Comment not found.";
const EDIT_FORBIDDEN: &str = "Only the owner can edit this comment.";
const DELETE_FORBIDDEN: &str = "Only the owner can delete this comment.";

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Notifier,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a Notifier) -> Self {
        Self { db, notifier }
    }

    /// Lists a post's comments, oldest first.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No post with that ID
    pub async fn get_by_post(&self, post_id: i32) -> Result<Vec<Comment>, AppError> {
        if PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(POST_NOT_FOUND.to_string()));
        }

        Ok(CommentRepository::new(self.db).get_by_post(post_id).await?)
    }

    /// Comments on a post and emails the post's author.
    ///
    /// No email is sent when authors comment on their own post.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::NotFound)` - No post with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        user: &User,
        post_id: i32,
        content: String,
    ) -> Result<Comment, AppError> {
        let post = PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))?;

        let comment = CommentRepository::new(self.db)
            .create(post.id, user.id, content)
            .await?;

        if post.author_id != user.id {
            match UserRepository::new(self.db).find_by_id(post.author_id).await {
                Ok(Some(author)) => {
                    self.notifier
                        .comment_created(user, &comment, &post, &author)
                        .await;
                }
                Ok(None) => {}
                Err(e) => tracing::warn!(
                    comment_id = comment.id,
                    "Skipping comment notification, failed to load post author: {}",
                    e
                ),
            }
        }

        Ok(comment)
    }

    /// Gets a comment or fails with `Comment not found.`.
    pub async fn get_by_id(&self, comment_id: i32) -> Result<Comment, AppError> {
        CommentRepository::new(self.db)
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND.to_string()))
    }

    /// Replaces the content of a comment owned by `user`.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The updated comment
    /// - `Err(AppError::NotFound)` - No comment with that ID
    /// - `Err(AppError::Forbidden)` - `user` is not the author
    pub async fn update(
        &self,
        user: &User,
        comment_id: i32,
        content: String,
    ) -> Result<Comment, AppError> {
        let comment = self.get_by_id(comment_id).await?;
        if comment.author_id != user.id {
            return Err(AppError::Forbidden(EDIT_FORBIDDEN.to_string()));
        }

        CommentRepository::new(self.db)
            .update(comment.id, content)
            .await?
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND.to_string()))
    }

    /// Deletes a comment owned by `user`.
    ///
    /// # Returns
    /// - `Ok(())` - Comment deleted
    /// - `Err(AppError::NotFound)` - No comment with that ID
    /// - `Err(AppError::Forbidden)` - `user` is not the author
    pub async fn delete(&self, user: &User, comment_id: i32) -> Result<(), AppError> {
        let comment = self.get_by_id(comment_id).await?;
        if comment.author_id != user.id {
            return Err(AppError::Forbidden(DELETE_FORBIDDEN.to_string()));
        }

        CommentRepository::new(self.db).delete(comment.id).await?;

        Ok(())
    }
}
