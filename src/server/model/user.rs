//! User domain models and parameters.
//!
//! Provides the account model, the public profile with follow counts, and the validated
//! parameter types for registration, login and profile updates.

use chrono::{DateTime, NaiveDate, Utc};
use validator::Validate;

use crate::{
    model::user::{
        LoginDto, RegisterUserDto, UpdateProfileDto, UserDto, UserProfileDto, UserSummaryDto,
    },
    server::{
        error::validation::FieldErrors,
        util::text::{is_valid_phone, non_blank, trimmed},
    },
};

const USERNAME_REQUIRED: &str = "Username is required.";
const EMAIL_REQUIRED: &str = "Email is required.";
const PASSWORD_REQUIRED: &str = "Password is required.";
const INVALID_PHONE: &str = "Enter a valid phone number.";
pub const USERNAME_TAKEN: &str = "A user with that username already exists.";
pub const EMAIL_TAKEN: &str = "A user with that email already exists.";

/// Registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub bio: String,
    pub phone_no: String,
    /// URL of the profile picture, empty when unset.
    pub profile_pic: String,
    pub dob: Option<NaiveDate>,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Name shown in notifications: the display name when set, otherwise the username.
    pub fn display_text(&self) -> &str {
        let display_name = self.display_name.trim();
        if display_name.is_empty() {
            &self.username
        } else {
            display_name
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash stays behind in the entity.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            display_name: entity.display_name,
            bio: entity.bio,
            phone_no: entity.phone_no,
            profile_pic: entity.profile_pic,
            dob: entity.dob,
            date_joined: entity.date_joined,
        }
    }

    /// Converts the user into the owner-only account representation.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            display_name: self.display_name,
            bio: self.bio,
            phone_no: self.phone_no,
            profile_pic: self.profile_pic,
            dob: self.dob,
            date_joined: self.date_joined,
        }
    }

    /// Converts the user into the public summary used in follow lists.
    pub fn into_summary_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            profile_pic: self.profile_pic,
        }
    }
}

/// Public profile with follow counts.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub followers_count: u64,
    pub following_count: u64,
}

impl UserProfile {
    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            id: self.user.id,
            username: self.user.username,
            display_name: self.user.display_name,
            bio: self.user.bio,
            profile_pic: self.user.profile_pic,
            followers_count: self.followers_count,
            following_count: self.following_count,
        }
    }
}

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub bio: String,
    pub phone_no: String,
    pub dob: Option<NaiveDate>,
}

impl RegisterUserParams {
    /// Normalizes and validates a registration request.
    ///
    /// Text fields are trimmed (the password is kept verbatim). All problems are collected
    /// before returning so the client sees every field error at once.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParams)` - Input is well formed
    /// - `Err(FieldErrors)` - One or more fields are missing or malformed
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, FieldErrors> {
        let dto = RegisterUserDto {
            username: non_blank(dto.username),
            email: non_blank(dto.email),
            password: dto.password.filter(|p| !p.is_empty()),
            first_name: trimmed(dto.first_name),
            last_name: trimmed(dto.last_name),
            display_name: trimmed(dto.display_name),
            bio: trimmed(dto.bio),
            phone_no: trimmed(dto.phone_no),
            dob: dto.dob,
        };

        let mut errors = match dto.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };

        if dto.username.is_none() {
            errors.add("username", USERNAME_REQUIRED);
        }
        if dto.email.is_none() {
            errors.add("email", EMAIL_REQUIRED);
        }
        if dto.password.is_none() {
            errors.add("password", PASSWORD_REQUIRED);
        }
        check_phone(dto.phone_no.as_deref(), &mut errors);

        match (dto.username, dto.email, dto.password) {
            (Some(username), Some(email), Some(password)) if errors.is_empty() => Ok(Self {
                username,
                email,
                password,
                first_name: dto.first_name.unwrap_or_default(),
                last_name: dto.last_name.unwrap_or_default(),
                display_name: dto.display_name.unwrap_or_default(),
                bio: dto.bio.unwrap_or_default(),
                phone_no: dto.phone_no.unwrap_or_default(),
                dob: dto.dob,
            }),
            _ => Err(errors),
        }
    }
}

/// Registration input with the password already hashed, as stored by the repository.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub bio: String,
    pub phone_no: String,
    pub dob: Option<NaiveDate>,
}

impl CreateUserParams {
    pub fn from_registration(params: RegisterUserParams, password_hash: String) -> Self {
        Self {
            username: params.username,
            email: params.email,
            password_hash,
            first_name: params.first_name,
            last_name: params.last_name,
            display_name: params.display_name,
            bio: params.bio,
            phone_no: params.phone_no,
            dob: params.dob,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    /// Requires both credentials to be present and non-blank.
    pub fn from_dto(dto: LoginDto) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = non_blank(dto.username);
        let password = dto.password.filter(|p| !p.is_empty());

        if username.is_none() {
            errors.add("username", USERNAME_REQUIRED);
        }
        if password.is_none() {
            errors.add("password", PASSWORD_REQUIRED);
        }

        match (username, password) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            _ => Err(errors),
        }
    }
}

/// Whether an update replaces the resource (`PUT`) or patches it (`PATCH`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Required fields must be supplied.
    Replace,
    /// Only supplied fields change.
    Partial,
}

/// Validated profile changes; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub phone_no: Option<String>,
    pub profile_pic: Option<String>,
    pub dob: Option<Option<NaiveDate>>,
}

impl UpdateProfileParams {
    /// Normalizes and validates a profile update.
    ///
    /// # Arguments
    /// - `dto` - Submitted fields
    /// - `mode` - `Replace` additionally requires username and email
    ///
    /// # Returns
    /// - `Ok(UpdateProfileParams)` - Input is well formed
    /// - `Err(FieldErrors)` - One or more fields are missing or malformed
    pub fn from_dto(dto: UpdateProfileDto, mode: UpdateMode) -> Result<Self, FieldErrors> {
        let dto = UpdateProfileDto {
            username: trimmed(dto.username),
            email: trimmed(dto.email),
            first_name: trimmed(dto.first_name),
            last_name: trimmed(dto.last_name),
            display_name: trimmed(dto.display_name),
            bio: trimmed(dto.bio),
            phone_no: trimmed(dto.phone_no),
            profile_pic: trimmed(dto.profile_pic),
            dob: dto.dob,
        };

        let mut errors = FieldErrors::new();

        let username_blank = is_blank_or_missing(dto.username.as_deref(), mode);
        let email_blank = is_blank_or_missing(dto.email.as_deref(), mode);

        if username_blank {
            errors.add("username", USERNAME_REQUIRED);
        }
        if email_blank {
            errors.add("email", EMAIL_REQUIRED);
        }

        // Blank values are already reported, skip format checks for them.
        let checked = UpdateProfileDto {
            username: dto.username.clone().filter(|_| !username_blank),
            email: dto.email.clone().filter(|_| !email_blank),
            display_name: dto.display_name.clone(),
            ..Default::default()
        };
        if let Err(e) = checked.validate() {
            errors.merge(FieldErrors::from(e));
        }
        check_phone(dto.phone_no.as_deref(), &mut errors);

        errors.into_result()?;

        Ok(Self {
            username: dto.username,
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
            display_name: dto.display_name,
            bio: dto.bio,
            phone_no: dto.phone_no,
            profile_pic: dto.profile_pic,
            dob: dto.dob,
        })
    }
}

fn is_blank_or_missing(value: Option<&str>, mode: UpdateMode) -> bool {
    match value {
        Some(value) => value.is_empty(),
        None => mode == UpdateMode::Replace,
    }
}

fn check_phone(phone_no: Option<&str>, errors: &mut FieldErrors) {
    if let Some(phone_no) = phone_no {
        if !phone_no.is_empty() && !is_valid_phone(phone_no) {
            errors.add("phone_no", INVALID_PHONE);
        }
    }
}
