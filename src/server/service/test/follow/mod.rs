use super::memory_notifier;
use crate::server::{
    data::follow::FollowRepository,
    error::AppError,
    model::{toggle::ToggleOutcome, user::User},
    service::follow::{add_follow, FollowService},
};
use axum::{http::StatusCode, response::IntoResponse};
use sea_orm::{EntityTrait, PaginatorTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};
