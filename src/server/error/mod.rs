//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the JSON error envelope. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements `IntoResponse`
//! for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{
            auth::AuthError, config::ConfigError, internal::InternalError,
            validation::FieldErrors,
        },
        service::notification::mailer::MailError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Client-facing variants carry the message that
/// ends up in the envelope, infrastructure variants are logged and reported as a generic
/// 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()`, always 401 Unauthorized.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Filesystem error while storing or serving media.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Mail transport could not be built at startup.
    ///
    /// Send failures never surface here; notifications swallow them.
    #[error(transparent)]
    MailErr(#[from] MailError),

    /// Unexpected internal condition.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Request data failed validation.
    ///
    /// Results in 400 Bad Request with message `Validation error.` and the per-field
    /// messages under `errors`.
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    /// Authenticated user is not allowed to perform the action.
    ///
    /// Results in 403 Forbidden with the provided message.
    #[error("{0}")]
    Forbidden(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness constraint rejected a concurrent duplicate.
    ///
    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl AppError {
    /// Maps a unique constraint violation to `Conflict`, passing other errors through.
    ///
    /// # Arguments
    /// - `err` - Error returned by an insert
    /// - `message` - Client-facing message for the conflict case
    ///
    /// # Returns
    /// - `AppError::Conflict` - `err` was a unique or primary key violation
    /// - `AppError::DbErr` - Any other database error
    pub fn from_unique_violation(err: DbErr, message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message.to_string()),
            _ => AppError::DbErr(err),
        }
    }
}

/// Builds the error envelope response.
pub(crate) fn envelope(
    status: StatusCode,
    message: impl Into<String>,
    errors: Option<FieldErrors>,
) -> Response {
    (
        status,
        Json(ErrorDto {
            success: false,
            status_code: status.as_u16(),
            message: message.into(),
            errors: errors.map(FieldErrors::into_map),
        }),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 401 Unauthorized - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 403 Forbidden - For `Forbidden`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(errors) => {
                envelope(StatusCode::BAD_REQUEST, "Validation error.", Some(errors))
            }
            Self::Forbidden(msg) => envelope(StatusCode::FORBIDDEN, msg, None),
            Self::NotFound(msg) => envelope(StatusCode::NOT_FOUND, msg, None),
            Self::Conflict(msg) => envelope(StatusCode::CONFLICT, msg, None),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        envelope(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error.",
            None,
        )
    }
}

#[cfg(test)]
mod test;
