use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Envelope returned for every non-2xx response.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    /// Always `false`.
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    /// Field name to messages, present on validation errors only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

/// Plain acknowledgement body such as `{"detail": "Post deleted."}`.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct DetailDto {
    pub detail: String,
}

/// Accepts either a single string or a list of strings.
///
/// Multipart forms carry one value per part, so a list field sent once arrives as a
/// plain string.
pub fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    Ok(
        match Option::<StringOrList>::deserialize(deserializer)? {
            None => None,
            Some(StringOrList::One(value)) => Some(vec![value]),
            Some(StringOrList::Many(values)) => Some(values),
        },
    )
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
