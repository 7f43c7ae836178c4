use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{
            LoginDto, RegisterUserDto, RegisteredUserDto, TokenDto, UpdateProfileDto, UserDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{LoginParams, RegisterUserParams, UpdateMode, UpdateProfileParams},
        service::{auth::AuthService, upload::UploadService, user::UserService},
        state::AppState,
        util::payload::{FormPayload, JsonBody},
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the account and returns it together with its authentication token. Field
/// problems, including a taken username or email, are reported together.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Registration data
///
/// # Returns
/// - `201 Created` - Account created, body includes `token`
/// - `400 Bad Request` - Invalid or conflicting registration data
/// - `409 Conflict` - An identical account was registered concurrently
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = RegisteredUserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Duplicate registration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::from_dto(payload)?;

    let (user, token) = AuthService::new(&state.db, &state.notifier)
        .register(params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisteredUserDto {
            user: user.into_dto(),
            token,
        }),
    ))
}

/// Log in with username and password.
///
/// Returns the account's token, creating one on first login, and emails the account
/// owner about the login.
///
/// # Returns
/// - `200 OK` - Credentials valid
/// - `400 Bad Request` - Missing fields or `Invalid credentials.`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = LoginParams::from_dto(payload)?;

    let token = AuthService::new(&state.db, &state.notifier)
        .login(params)
        .await?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

/// Get the authenticated user's account.
///
/// # Access Control
/// - Token authentication required
///
/// # Returns
/// - `200 OK` - Full account including email and phone number
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated account", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Replace the authenticated user's profile.
///
/// Username and email are required. Accepts JSON or multipart form data; a multipart
/// `file` part is validated as an image and becomes the profile picture.
///
/// # Access Control
/// - Token authentication required
///
/// # Returns
/// - `200 OK` - Updated account
/// - `400 Bad Request` - Invalid fields or image
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database or filesystem error
#[utoipa::path(
    put,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated account", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn replace_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: FormPayload,
) -> Result<impl IntoResponse, AppError> {
    update_me(state, headers, payload, UpdateMode::Replace).await
}

/// Partially update the authenticated user's profile.
///
/// Same as `PUT` except every field is optional.
#[utoipa::path(
    patch,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated account", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("token" = []))
)]
pub async fn patch_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: FormPayload,
) -> Result<impl IntoResponse, AppError> {
    update_me(state, headers, payload, UpdateMode::Partial).await
}

async fn update_me(
    state: AppState,
    headers: HeaderMap,
    payload: FormPayload,
    mode: UpdateMode,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let mut params = UpdateProfileParams::from_dto(payload.parse::<UpdateProfileDto>()?, mode)?;

    if let Some(file) = &payload.file {
        let url = UploadService::new(&state.media)
            .store_image(Some(file))
            .await?;
        params.profile_pic = Some(url);
    }

    let updated = UserService::new(&state.db, &state.notifier)
        .update_me(&user, params)
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}
