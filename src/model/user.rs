use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::api::deserialize_nullable;

/// Registration request.
///
/// Required fields are optional here so that a missing field is reported as a field
/// error rather than a body rejection.
#[derive(Deserialize, Validate, ToSchema, Debug, Default)]
pub struct RegisterUserDto {
    #[validate(length(max = 150, message = "Ensure this field has no more than 150 characters."))]
    pub username: Option<String>,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long."))]
    pub password: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[validate(length(max = 120, message = "Ensure this field has no more than 120 characters."))]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone_no: Option<String>,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
}

#[derive(Deserialize, ToSchema, Debug, Default)]
pub struct LoginDto {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct TokenDto {
    pub token: String,
}

/// Full account representation, visible to the account owner only.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub bio: String,
    pub phone_no: String,
    pub profile_pic: String,
    pub dob: Option<NaiveDate>,
    pub date_joined: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct RegisteredUserDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub token: String,
}

/// Profile update request for `PUT` and `PATCH /api/auth/me`.
#[derive(Deserialize, Validate, ToSchema, Debug, Default)]
pub struct UpdateProfileDto {
    #[validate(length(max = 150, message = "Ensure this field has no more than 150 characters."))]
    pub username: Option<String>,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(length(max = 120, message = "Ensure this field has no more than 120 characters."))]
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub phone_no: Option<String>,
    pub profile_pic: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<NaiveDate>)]
    pub dob: Option<Option<NaiveDate>>,
}

/// Public summary used in follower lists.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UserSummaryDto {
    pub id: i32,
    pub username: String,
    pub display_name: String,
    pub profile_pic: String,
}

/// Public profile; never exposes email or phone number.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct UserProfileDto {
    pub id: i32,
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub profile_pic: String,
    pub followers_count: u64,
    pub following_count: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct FollowToggleDto {
    pub detail: String,
    pub following: bool,
}
