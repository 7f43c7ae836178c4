use crate::server::{
    data::post::PostRepository,
    model::post::{CreatePostParams, PostFilter, UpdatePostParams},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;
mod get_by_followed_authors;
mod update;

fn create_params(author_id: i32, tag_names: &[&str]) -> CreatePostParams {
    CreatePostParams {
        author_id,
        name: "Hello".to_string(),
        content: "First post".to_string(),
        image: String::new(),
        category: "News".to_string(),
        tag_names: tag_names.iter().map(|t| t.to_string()).collect(),
    }
}
