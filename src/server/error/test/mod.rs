use axum::{
    body::to_bytes,
    http::{header::WWW_AUTHENTICATE, StatusCode},
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::{json, Value};

use crate::server::error::{
    auth::AuthError,
    validation::{FieldErrors, NON_FIELD_ERRORS},
    AppError,
};


async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
