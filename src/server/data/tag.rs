//! Tag repository.
//!
//! Each tag stores its first spelling in `name` and the lowercased form in
//! `normalized_name`. Lookups and uniqueness go through `normalized_name`, so `Rust`,
//! `rust` and `RUST` resolve to the same tag. Case is folded in Rust rather than with
//! SQLite's ASCII-only `LOWER`.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::tag::Tag;

/// Case-folded form used for tag lookups and uniqueness.
fn normalize(name: &str) -> String {
    name.to_lowercase()
}

pub struct TagRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a tag whose name matches case-insensitively.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, DbErr> {
        let entity = entity::prelude::Tag::find()
            .filter(entity::tag::Column::NormalizedName.eq(normalize(name)))
            .one(self.db)
            .await?;

        Ok(entity.map(Tag::from_entity))
    }

    /// Returns the tag matching `name` case-insensitively, creating it if missing.
    ///
    /// A new tag keeps the given spelling.
    ///
    /// # Returns
    /// - `Ok(Tag)` - Existing or newly created tag
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn get_or_create(&self, name: &str) -> Result<Tag, DbErr> {
        if let Some(tag) = self.find_by_name(name).await? {
            return Ok(tag);
        }

        let now = Utc::now();
        entity::prelude::Tag::insert(entity::tag::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            normalized_name: ActiveValue::Set(normalize(name)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::tag::Column::NormalizedName)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_by_name(name)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Tag '{}' not found after creation",
                name
            )))
    }

    /// Gets all tags ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Tag>, DbErr> {
        let entities = entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    /// Maps each post ID to its tag names, sorted by name.
    ///
    /// Posts without tags are absent from the result.
    pub async fn get_names_for_posts(
        &self,
        post_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<String>>, DbErr> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::PostTag::find()
            .filter(entity::post_tag::Column::PostId.is_in(post_ids))
            .find_also_related(entity::prelude::Tag)
            .all(self.db)
            .await?;

        let mut names: HashMap<i32, Vec<String>> = HashMap::new();
        for (link, tag) in links {
            if let Some(tag) = tag {
                names.entry(link.post_id).or_default().push(tag.name);
            }
        }
        for tag_names in names.values_mut() {
            tag_names.sort();
        }

        Ok(names)
    }
}
