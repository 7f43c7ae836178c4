//! Comment repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::comment::Comment;

pub struct CommentRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a comment on a post.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment with its author's username
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        post_id: i32,
        author_id: i32,
        content: String,
    ) -> Result<Comment, DbErr> {
        let now = Utc::now();

        let comment = entity::comment::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            author_id: ActiveValue::Set(author_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(comment.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Comment with id {} not found after creation",
                comment.id
            )))
    }

    /// Finds a comment by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let result = entity::prelude::Comment::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.map(|(comment, author)| {
            Comment::from_entity(comment, author.map(|a| a.username).unwrap_or_default())
        }))
    }

    /// Lists a post's comments, oldest first.
    pub async fn get_by_post(&self, post_id: i32) -> Result<Vec<Comment>, DbErr> {
        let results = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(comment, author)| {
                Comment::from_entity(comment, author.map(|a| a.username).unwrap_or_default())
            })
            .collect())
    }

    /// Replaces a comment's content.
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - The updated comment
    /// - `Ok(None)` - No comment with that ID
    pub async fn update(&self, id: i32, content: String) -> Result<Option<Comment>, DbErr> {
        let Some(entity) = entity::prelude::Comment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::comment::ActiveModel = entity.into();
        active.content = ActiveValue::Set(content);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    /// Deletes a comment.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of comments removed (0 or 1)
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
