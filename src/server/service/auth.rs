//! Account registration and token login.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{auth_token::AuthTokenRepository, user::UserRepository},
    error::{validation::FieldErrors, AppError},
    model::user::{
        CreateUserParams, LoginParams, RegisterUserParams, User, EMAIL_TAKEN, USERNAME_TAKEN,
    },
    service::notification::Notifier,
    util::password::{hash_password, verify_password},
};

const INVALID_CREDENTIALS: &str = "Invalid credentials.";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Notifier,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `notifier` - Notifier used for login emails
    pub fn new(db: &'a DatabaseConnection, notifier: &'a Notifier) -> Self {
        Self { db, notifier }
    }

    /// Registers an account and issues its token.
    ///
    /// Username and email conflicts are reported together as field errors. A duplicate
    /// created concurrently between the check and the insert is reported as a conflict.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The created account and its token key
    /// - `Err(AppError::Validation)` - Username or email already taken
    /// - `Err(AppError::Conflict)` - Lost a race with an identical registration
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterUserParams) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        let mut errors = FieldErrors::new();
        if user_repo.username_exists(&params.username, None).await? {
            errors.add("username", USERNAME_TAKEN);
        }
        if user_repo.email_exists(&params.email, None).await? {
            errors.add("email", EMAIL_TAKEN);
        }
        errors.into_result()?;

        let password_hash = hash_password(&params.password)?;

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(CreateUserParams::from_registration(params, password_hash))
            .await
            .map_err(|e| AppError::from_unique_violation(e, USERNAME_TAKEN))?;
        let token = AuthTokenRepository::new(&txn).get_or_create(user.id).await?;

        txn.commit().await?;

        tracing::info!(user_id = user.id, "registered user {}", user.username);

        Ok((user, token))
    }

    /// Verifies credentials and returns the account's token, creating it if needed.
    ///
    /// Sends the login notification on success.
    ///
    /// # Returns
    /// - `Ok(String)` - Token key
    /// - `Err(AppError::Validation)` - Unknown username or wrong password
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, params: LoginParams) -> Result<String, AppError> {
        let Some((user, password_hash)) = UserRepository::new(self.db)
            .find_credentials(&params.username)
            .await?
        else {
            return Err(FieldErrors::non_field(INVALID_CREDENTIALS).into());
        };

        if !verify_password(&params.password, &password_hash) {
            return Err(FieldErrors::non_field(INVALID_CREDENTIALS).into());
        }

        let token = AuthTokenRepository::new(self.db)
            .get_or_create(user.id)
            .await?;

        self.notifier.user_logged_in(&user).await;

        Ok(token)
    }
}
