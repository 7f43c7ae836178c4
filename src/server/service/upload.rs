//! Image upload validation and storage.

use crate::server::{
    data::media::MediaStorage,
    error::{internal::InternalError, validation::FieldErrors, AppError},
    util::{
        payload::{UploadedFile, FILE_FIELD},
        random,
    },
};

const NO_FILE: &str = "No file provided.";
const NOT_AN_IMAGE: &str = "Only image files allowed.";
const TOO_LARGE: &str = "Image must be under 5MB.";

/// Largest accepted image, in bytes.
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];
const DEFAULT_EXTENSION: &str = "jpg";
const STORED_NAME_LENGTH: usize = 18;
const UPLOAD_DIR: &str = "uploads";

pub struct UploadService<'a> {
    media: &'a MediaStorage,
}

impl<'a> UploadService<'a> {
    pub fn new(media: &'a MediaStorage) -> Self {
        Self { media }
    }

    /// Validates and stores an uploaded image under a random name.
    ///
    /// # Arguments
    /// - `file` - The multipart `file` part, if one was sent
    ///
    /// # Returns
    /// - `Ok(String)` - Absolute public URL of the stored image
    /// - `Err(AppError::Validation)` - Missing file, non-image content type or too large
    /// - `Err(AppError::IoErr)` - Writing to the media root failed
    pub async fn store_image(&self, file: Option<&UploadedFile>) -> Result<String, AppError> {
        let Some(file) = file else {
            return Err(FieldErrors::single(FILE_FIELD, NO_FILE).into());
        };

        let is_image = file
            .content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().starts_with("image/"))
            .unwrap_or(false);
        if !is_image {
            return Err(FieldErrors::single(FILE_FIELD, NOT_AN_IMAGE).into());
        }
        if file.data.len() > MAX_IMAGE_SIZE {
            return Err(FieldErrors::single(FILE_FIELD, TOO_LARGE).into());
        }

        let relative_path = format!(
            "{}/{}.{}",
            UPLOAD_DIR,
            random::alphanumeric(STORED_NAME_LENGTH),
            stored_extension(file.file_name.as_deref())
        );

        self.media.save(&relative_path, &file.data).await?;

        let url = self
            .media
            .url_for(&relative_path)
            .map_err(InternalError::from)?;

        tracing::info!(path = %relative_path, size = file.data.len(), "stored uploaded image");

        Ok(url)
    }
}

/// Lowercased extension of `file_name` when allowed, otherwise `jpg`.
fn stored_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| std::path::Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}
