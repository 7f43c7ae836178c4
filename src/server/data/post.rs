//! Post data repository for database operations.
//!
//! This module provides the `PostRepository` for creating, updating, deleting and
//! listing posts. Every read returns fully hydrated `Post` domain models carrying the
//! author's username, tag names and like/comment counters, loaded in batched queries.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
};
use std::collections::HashMap;

use crate::server::{
    data::{tag::TagRepository, user::UserRepository},
    model::post::{CreatePostParams, Post, PostFilter, UpdatePostParams},
    util::text::escape_like,
};

pub struct PostRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    /// Creates a new PostRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a post and attaches its tags, creating missing tags on the way.
    ///
    /// # Arguments
    /// - `params` - Validated post data with normalized tag names
    ///
    /// # Returns
    /// - `Ok(Post)` - The created, hydrated post
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreatePostParams) -> Result<Post, DbErr> {
        let now = Utc::now();

        let post = entity::post::ActiveModel {
            author_id: ActiveValue::Set(params.author_id),
            name: ActiveValue::Set(params.name),
            content: ActiveValue::Set(params.content),
            image: ActiveValue::Set(params.image),
            category: ActiveValue::Set(params.category),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.replace_tags(post.id, &params.tag_names).await?;

        self.find_by_id(post.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Post with id {} not found after creation",
                post.id
            )))
    }

    /// Finds a post by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - Hydrated post
    /// - `Ok(None)` - No post with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DbErr> {
        let Some(entity) = entity::prelude::Post::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![entity]).await?.pop())
    }

    /// Applies post changes. `None` fields keep their stored value and a present
    /// `tag_names` replaces the whole tag set.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - The updated, hydrated post
    /// - `Ok(None)` - No post with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdatePostParams) -> Result<Option<Post>, DbErr> {
        let Some(entity) = entity::prelude::Post::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::post::ActiveModel = entity.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(content) = params.content {
            active.content = ActiveValue::Set(content);
        }
        if let Some(image) = params.image {
            active.image = ActiveValue::Set(image);
        }
        if let Some(category) = params.category {
            active.category = ActiveValue::Set(category);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await?;

        if let Some(tag_names) = params.tag_names {
            self.replace_tags(id, &tag_names).await?;
        }

        self.find_by_id(id).await
    }

    /// Deletes a post. Comments, likes and tag links cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of posts removed (0 or 1)
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Post::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Lists posts newest first.
    ///
    /// `search` matches post content or any tag name as a case-insensitive substring;
    /// `category` is a case-insensitive exact match. Each post appears once even when
    /// several of its tags match.
    pub async fn get_all(&self, filter: &PostFilter) -> Result<Vec<Post>, DbErr> {
        let mut query = entity::prelude::Post::find();

        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", escape_like(&search.to_lowercase()));

            let tagged_post_ids = entity::prelude::PostTag::find()
                .select_only()
                .column(entity::post_tag::Column::PostId)
                .inner_join(entity::prelude::Tag)
                .filter(Expr::cust_with_values(
                    r#""tag"."normalized_name" LIKE ? ESCAPE '\'"#,
                    [pattern.clone()],
                ))
                .into_query();

            query = query.filter(
                Condition::any()
                    .add(Expr::cust_with_values(
                        r#"LOWER("post"."content") LIKE ? ESCAPE '\'"#,
                        [pattern],
                    ))
                    .add(entity::post::Column::Id.in_subquery(tagged_post_ids)),
            );
        }

        if let Some(category) = &filter.category {
            query = query.filter(Expr::cust_with_values(
                r#"LOWER("post"."category") = ?"#,
                [category.to_lowercase()],
            ));
        }

        self.fetch(query).await
    }

    /// Lists posts written by `author_id`, newest first.
    pub async fn get_by_author(&self, author_id: i32) -> Result<Vec<Post>, DbErr> {
        let query = entity::prelude::Post::find()
            .filter(entity::post::Column::AuthorId.eq(author_id));

        self.fetch(query).await
    }

    /// Lists posts liked by `user_id`, newest post first.
    pub async fn get_liked_by(&self, user_id: i32) -> Result<Vec<Post>, DbErr> {
        let liked_post_ids = entity::prelude::PostLike::find()
            .select_only()
            .column(entity::post_like::Column::PostId)
            .filter(entity::post_like::Column::UserId.eq(user_id))
            .into_query();

        let query = entity::prelude::Post::find()
            .filter(entity::post::Column::Id.in_subquery(liked_post_ids));

        self.fetch(query).await
    }

    /// Lists posts written by users that `user_id` follows, newest first.
    pub async fn get_by_followed_authors(&self, user_id: i32) -> Result<Vec<Post>, DbErr> {
        let followed_ids = entity::prelude::Follow::find()
            .select_only()
            .column(entity::follow::Column::FollowingId)
            .filter(entity::follow::Column::FollowerId.eq(user_id))
            .into_query();

        let query = entity::prelude::Post::find()
            .filter(entity::post::Column::AuthorId.in_subquery(followed_ids));

        self.fetch(query).await
    }

    /// Replaces the tag set of a post.
    async fn replace_tags(&self, post_id: i32, tag_names: &[String]) -> Result<(), DbErr> {
        entity::prelude::PostTag::delete_many()
            .filter(entity::post_tag::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        let tag_repo = TagRepository::new(self.db);
        let mut linked = Vec::new();

        for name in tag_names {
            let tag = tag_repo.get_or_create(name).await?;
            if linked.contains(&tag.id) {
                continue;
            }
            linked.push(tag.id);

            entity::post_tag::ActiveModel {
                post_id: ActiveValue::Set(post_id),
                tag_id: ActiveValue::Set(tag.id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    async fn fetch(&self, query: Select<entity::post::Entity>) -> Result<Vec<Post>, DbErr> {
        let entities = query
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    /// Loads author names, tags and counters for a batch of posts, preserving order.
    async fn hydrate(&self, entities: Vec<entity::post::Model>) -> Result<Vec<Post>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<i32> = entities.iter().map(|p| p.id).collect();
        let mut author_ids: Vec<i32> = entities.iter().map(|p| p.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let usernames = UserRepository::new(self.db)
            .get_usernames(author_ids)
            .await?;
        let mut tags = TagRepository::new(self.db)
            .get_names_for_posts(post_ids.clone())
            .await?;
        let likes = self.count_likes(post_ids.clone()).await?;
        let comments = self.count_comments(post_ids).await?;

        Ok(entities
            .into_iter()
            .map(|entity| Post {
                id: entity.id,
                author_id: entity.author_id,
                author_username: usernames
                    .get(&entity.author_id)
                    .cloned()
                    .unwrap_or_default(),
                name: entity.name,
                content: entity.content,
                image: entity.image,
                category: entity.category,
                tags: tags.remove(&entity.id).unwrap_or_default(),
                likes_count: likes.get(&entity.id).copied().unwrap_or(0),
                comments_count: comments.get(&entity.id).copied().unwrap_or(0),
                created_at: entity.created_at,
                updated_at: entity.updated_at,
            })
            .collect())
    }

    async fn count_likes(&self, post_ids: Vec<i32>) -> Result<HashMap<i32, u64>, DbErr> {
        let rows: Vec<(i32, i64)> = entity::prelude::PostLike::find()
            .select_only()
            .column(entity::post_like::Column::PostId)
            .column_as(
                Expr::from(Func::count(Expr::col(entity::post_like::Column::UserId))),
                "count",
            )
            .filter(entity::post_like::Column::PostId.is_in(post_ids))
            .group_by(entity::post_like::Column::PostId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, count)| (id, count as u64))
            .collect())
    }

    async fn count_comments(&self, post_ids: Vec<i32>) -> Result<HashMap<i32, u64>, DbErr> {
        let rows: Vec<(i32, i64)> = entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::PostId)
            .column_as(
                Expr::from(Func::count(Expr::col(entity::comment::Column::Id))),
                "count",
            )
            .filter(entity::comment::Column::PostId.is_in(post_ids))
            .group_by(entity::comment::Column::PostId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, count)| (id, count as u64))
            .collect())
    }
}
