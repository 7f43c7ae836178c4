//! Request extractors that report malformed input through the error envelope.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Multipart, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::server::error::{validation::FieldErrors, AppError};

/// Multipart part name carrying an uploaded file.
pub const FILE_FIELD: &str = "file";

/// JSON body whose parse failures become 400 validation errors.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(FieldErrors::non_field(rejection.body_text()).into()),
        }
    }
}

/// Path parameter whose parse failures become 404 responses.
///
/// An id that is not a number, or does not fit the target type, cannot name an existing
/// row.
pub struct PathId<T>(pub T);

impl<T, S> FromRequestParts<S> for PathId<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("Rejected path parameter: {}", rejection.body_text());
                Err(AppError::NotFound("Not found.".to_string()))
            }
        }
    }
}

/// File received in a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Body accepted either as a JSON object or as multipart form data.
///
/// Multipart text parts become string fields; a part sent more than once becomes a
/// list. The part named `file` is kept aside as an [`UploadedFile`].
pub struct FormPayload {
    fields: Map<String, Value>,
    pub file: Option<UploadedFile>,
}

impl FormPayload {
    /// Deserializes the collected fields into `T`.
    ///
    /// # Returns
    /// - `Ok(T)` - Fields matched the expected shape
    /// - `Err(AppError::Validation)` - A field had the wrong type or format
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_value(Value::Object(self.fields.clone()))
            .map_err(|e| FieldErrors::non_field(e.to_string()).into())
    }

    fn from_json(bytes: &[u8]) -> Result<Self, AppError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self {
                fields: Map::new(),
                file: None,
            });
        }

        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| FieldErrors::non_field(format!("JSON parse error - {}", e)))?;

        match value {
            Value::Object(fields) => Ok(Self { fields, file: None }),
            _ => Err(FieldErrors::non_field("Invalid data. Expected a dictionary.").into()),
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut fields = Map::new();
        let mut file = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| FieldErrors::non_field(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == FILE_FIELD {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| FieldErrors::single(FILE_FIELD, e.body_text()))?;

                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
                continue;
            }

            let text = field
                .text()
                .await
                .map_err(|e| FieldErrors::single(name.clone(), e.body_text()))?;

            insert_form_value(&mut fields, name, text);
        }

        Ok(Self { fields, file })
    }
}

fn insert_form_value(fields: &mut Map<String, Value>, name: String, text: String) {
    match fields.get_mut(&name) {
        Some(Value::Array(values)) => values.push(Value::String(text)),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, Value::String(text)]);
        }
        None => {
            fields.insert(name, Value::String(text));
        }
    }
}

impl<S> FromRequest<S> for FormPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("multipart/form-data"))
            .unwrap_or(false);

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| FieldErrors::non_field(e.body_text()))?;

            Self::from_multipart(multipart).await
        } else {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|e| FieldErrors::non_field(e.body_text()))?;

            Self::from_json(&bytes)
        }
    }
}
