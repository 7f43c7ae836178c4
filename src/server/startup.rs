use std::sync::Arc;

use url::Url;

use crate::server::{
    config::Config,
    data::media::MediaStorage,
    error::{internal::InternalError, AppError},
    service::notification::{
        mailer::{ConsoleMailer, Mailer, SmtpMailer},
        Notifier,
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the notifier with an SMTP transport, or a logging transport when no SMTP
/// host is configured.
///
/// # Returns
/// - `Ok(Notifier)` - Notifier using the configured dispatch mode
/// - `Err(AppError::MailErr)` - Invalid sender address or SMTP relay
pub fn setup_notifier(config: &Config) -> Result<Notifier, AppError> {
    let mailer: Arc<dyn Mailer> = match &config.smtp {
        Some(smtp) => {
            tracing::info!("Sending email through SMTP relay {}:{}", smtp.host, smtp.port);
            Arc::new(SmtpMailer::new(smtp, &config.default_from_email)?)
        }
        None => {
            tracing::info!("SMTP_HOST not set, emails will be logged instead of sent");
            Arc::new(ConsoleMailer)
        }
    };

    Ok(Notifier::new(mailer, config.notification_mode))
}

/// Creates the media root directory and the storage that writes into it.
///
/// Public URLs are `APP_URL` joined with `MEDIA_URL`.
///
/// # Returns
/// - `Ok(MediaStorage)` - Storage rooted at `MEDIA_ROOT`
/// - `Err(AppError::IoErr)` - Media root could not be created
/// - `Err(AppError::Internal)` - `APP_URL` is not a valid absolute URL
pub async fn setup_media_storage(config: &Config) -> Result<MediaStorage, AppError> {
    tokio::fs::create_dir_all(&config.media_root).await?;

    let base_url = Url::parse(&format!("{}/", config.app_url))
        .and_then(|url| url.join(config.media_url.trim_start_matches('/')))
        .map_err(InternalError::from)?;

    Ok(MediaStorage::new(&config.media_root, base_url))
}
