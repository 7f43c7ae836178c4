use super::memory_notifier;
use crate::server::{
    data::post_like::PostLikeRepository,
    error::AppError,
    model::{toggle::ToggleOutcome, user::User},
    service::like::{add_like, LikeService},
};
use axum::{http::StatusCode, response::IntoResponse};
use sea_orm::{EntityTrait, PaginatorTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod toggle;
