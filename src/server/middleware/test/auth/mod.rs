use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    data::auth_token::AuthTokenRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn token_headers(key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Token {}", key)).unwrap(),
    );
    headers
}
