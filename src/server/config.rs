use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_MEDIA_ROOT: &str = "./media";
const DEFAULT_MEDIA_URL: &str = "/media/";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_FROM_EMAIL: &str = "no-reply@localhost";

/// How notification emails are sent relative to the request that triggered them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationMode {
    /// Send on a detached task; the response does not wait for the mail server.
    Background,
    /// Send before the response is returned.
    Sync,
}

/// SMTP relay settings. Absent when `SMTP_HOST` is unset.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub starttls: bool,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Absolute base URL used when building media links.
    pub app_url: String,
    pub media_root: String,
    pub media_url: String,

    pub smtp: Option<SmtpConfig>,
    pub default_from_email: String,
    pub notification_mode: NotificationMode,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let smtp = match optional_var("SMTP_HOST") {
            Some(host) => Some(SmtpConfig {
                host,
                port: parse_var("SMTP_PORT", DEFAULT_SMTP_PORT)?,
                username: optional_var("SMTP_USERNAME"),
                password: optional_var("SMTP_PASSWORD"),
                starttls: parse_var("SMTP_STARTTLS", true)?,
            }),
            None => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: optional_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            app_url: optional_var("APP_URL")
                .unwrap_or_else(|| DEFAULT_APP_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            media_root: optional_var("MEDIA_ROOT")
                .unwrap_or_else(|| DEFAULT_MEDIA_ROOT.to_string()),
            media_url: normalize_media_url(
                &optional_var("MEDIA_URL").unwrap_or_else(|| DEFAULT_MEDIA_URL.to_string()),
            ),
            smtp,
            default_from_email: optional_var("DEFAULT_FROM_EMAIL")
                .unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
            notification_mode: parse_notification_mode(optional_var("NOTIFICATION_MODE"))?,
        })
    }
}

/// Reads a variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional_var(name) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn parse_notification_mode(value: Option<String>) -> Result<NotificationMode, ConfigError> {
    match value.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None | Some("background") => Ok(NotificationMode::Background),
        Some("sync") => Ok(NotificationMode::Sync),
        Some(_) => Err(ConfigError::InvalidValue {
            name: "NOTIFICATION_MODE".to_string(),
            value: value.unwrap_or_default(),
        }),
    }
}

/// Ensures the media prefix starts and ends with a slash.
fn normalize_media_url(value: &str) -> String {
    let trimmed = value.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
