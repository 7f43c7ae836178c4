use sea_orm::DatabaseConnection;

use crate::server::{data::tag::TagRepository, error::AppError, model::tag::Tag};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every tag ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Tag>, AppError> {
        Ok(TagRepository::new(self.db).get_all().await?)
    }
}
