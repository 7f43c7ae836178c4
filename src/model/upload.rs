use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct UploadDto {
    /// Absolute URL of the stored image.
    pub url: String,
}
