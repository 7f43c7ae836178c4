//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Notifier for activity emails
//! - Media storage for uploaded images

use sea_orm::DatabaseConnection;

use crate::server::{data::media::MediaStorage, service::notification::Notifier};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Notifier` holds its mailer behind an `Arc`
/// - `MediaStorage` is a path and a URL
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Sends notification emails after writes commit.
    pub notifier: Notifier,

    /// Filesystem storage for uploaded images.
    pub media: MediaStorage,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `notifier` - Notification dispatcher
    /// - `media` - Upload storage
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, notifier: Notifier, media: MediaStorage) -> Self {
        Self {
            db,
            notifier,
            media,
        }
    }
}
