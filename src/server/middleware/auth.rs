use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::auth_token::AuthTokenRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Authentication scheme keyword expected in the `Authorization` header.
const TOKEN_KEYWORD: &str = "token";

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the request's token to its user.
    ///
    /// # Returns
    /// - `Ok(User)` - The token belongs to this user
    /// - `Err(AuthError::MissingCredentials)` - No `Token` credentials were sent
    /// - `Err(AuthError::MalformedHeader)` - Header has no key or more than one
    /// - `Err(AuthError::InvalidToken)` - Unknown key
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(key) = token_from_headers(self.headers)? else {
            return Err(AuthError::MissingCredentials.into());
        };

        let Some(user) = AuthTokenRepository::new(self.db)
            .find_user_by_key(&key)
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        Ok(user)
    }
}

/// Extracts the key from an `Authorization: Token <key>` header.
///
/// Other schemes are treated as no credentials. The keyword is matched
/// case-insensitively.
fn token_from_headers(headers: &HeaderMap) -> Result<Option<String>, AuthError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;

    let mut parts = value.split_whitespace();
    match parts.next() {
        Some(keyword) if keyword.eq_ignore_ascii_case(TOKEN_KEYWORD) => {}
        _ => return Ok(None),
    }

    match (parts.next(), parts.next()) {
        (Some(key), None) => Ok(Some(key.to_string())),
        _ => Err(AuthError::MalformedHeader),
    }
}
