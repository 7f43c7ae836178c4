//! Authentication token repository.
//!
//! Each account has at most one token; login reuses it instead of issuing a new one.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{model::user::User, util::random};

/// Length of generated token keys.
pub const TOKEN_LENGTH: usize = 40;

pub struct AuthTokenRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the user's token, creating one if none exists.
    ///
    /// Concurrent calls for the same user converge on a single row: the insert ignores
    /// a conflicting user ID and the stored token is read back.
    ///
    /// # Returns
    /// - `Ok(String)` - Token key
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn get_or_create(&self, user_id: i32) -> Result<String, DbErr> {
        if let Some(token) = self.find_by_user_id(user_id).await? {
            return Ok(token.key);
        }

        entity::prelude::AuthToken::insert(entity::auth_token::ActiveModel {
            key: ActiveValue::Set(random::alphanumeric(TOKEN_LENGTH)),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::auth_token::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_by_user_id(user_id)
            .await?
            .map(|token| token.key)
            .ok_or(DbErr::RecordNotFound(format!(
                "Auth token for user {} not found after creation",
                user_id
            )))
    }

    /// Resolves a token key to its user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Key is valid
    /// - `Ok(None)` - Unknown key
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_user_by_key(&self, key: &str) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::AuthToken::find_by_id(key.to_string())
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(_, user)| user).map(User::from_entity))
    }

    async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::auth_token::Model>, DbErr> {
        entity::prelude::AuthToken::find()
            .filter(entity::auth_token::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }
}
