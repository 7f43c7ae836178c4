use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::envelope;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header was sent.
    #[error("Authentication credentials were not provided.")]
    MissingCredentials,

    /// The header is not of the form `Token <key>`.
    #[error("Invalid token header.")]
    MalformedHeader,

    /// The key does not belong to any user.
    #[error("Invalid token.")]
    InvalidToken,
}

/// Converts authentication errors into 401 Unauthorized envelopes.
///
/// The `WWW-Authenticate` header advertises the `Token` scheme.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let mut response = envelope(StatusCode::UNAUTHORIZED, self.to_string(), None);
        response.headers_mut().insert(
            axum::http::header::WWW_AUTHENTICATE,
            axum::http::HeaderValue::from_static("Token"),
        );
        response
    }
}
