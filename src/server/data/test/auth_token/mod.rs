use crate::server::data::auth_token::{AuthTokenRepository, TOKEN_LENGTH};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
