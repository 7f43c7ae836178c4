use super::memory_notifier;
use crate::server::{
    error::AppError,
    model::{
        post::{CreatePostParams, UpdatePostParams},
        user::User,
    },
    service::post::PostService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_author;

fn create_params(author_id: i32) -> CreatePostParams {
    CreatePostParams {
        author_id,
        name: "Hello".to_string(),
        content: "Body text".to_string(),
        image: String::new(),
        category: String::new(),
        tag_names: vec!["rust".to_string()],
    }
}
