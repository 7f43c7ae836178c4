//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. It handles
//! account creation, lookups used by authentication and uniqueness checks, and profile
//! updates, converting entity models to domain models at the boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};
use std::collections::HashMap;

use crate::server::model::user::{CreateUserParams, UpdateProfileParams, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Arguments
    /// - `params` - Validated registration data with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(DbErr)` - Database error, including unique violations on username or email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            display_name: ActiveValue::Set(params.display_name),
            bio: ActiveValue::Set(params.bio),
            phone_no: ActiveValue::Set(params.phone_no),
            profile_pic: ActiveValue::Set(String::new()),
            dob: ActiveValue::Set(params.dob),
            date_joined: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their stored password hash by exact username.
    ///
    /// # Returns
    /// - `Ok(Some((User, String)))` - Account and PHC password hash
    /// - `Ok(None)` - No account with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials(&self, username: &str) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let hash = e.password_hash.clone();
            (User::from_entity(e), hash)
        }))
    }

    /// Maps user IDs to usernames.
    ///
    /// IDs without a matching row are absent from the result.
    pub async fn get_usernames(&self, ids: Vec<i32>) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|u| (u.id, u.username)).collect())
    }

    /// Checks whether a username is taken by an account other than `exclude_id`.
    pub async fn username_exists(
        &self,
        username: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Username.eq(username));
        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether an email is taken by an account other than `exclude_id`.
    pub async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));
        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies profile changes. Fields left as `None` keep their stored value.
    ///
    /// # Arguments
    /// - `id` - ID of the account to update
    /// - `params` - Validated changes
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated account
    /// - `Ok(None)` - No account with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateProfileParams) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();

        if let Some(username) = params.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(display_name) = params.display_name {
            active.display_name = ActiveValue::Set(display_name);
        }
        if let Some(bio) = params.bio {
            active.bio = ActiveValue::Set(bio);
        }
        if let Some(phone_no) = params.phone_no {
            active.phone_no = ActiveValue::Set(phone_no);
        }
        if let Some(profile_pic) = params.profile_pic {
            active.profile_pic = ActiveValue::Set(profile_pic);
        }
        if let Some(dob) = params.dob {
            active.dob = ActiveValue::Set(dob);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }
}
