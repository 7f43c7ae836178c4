//! Shared helper utilities for factory methods.
//!
//! Provides ID generation used across all factories plus convenience methods for
//! creating entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a post authored by them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((author, post))` - The created user and post entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::post::Model), DbErr> {
    let author = crate::factory::user::create_user(db).await?;
    let post = crate::factory::post::create_post(db, author.id).await?;

    Ok((author, post))
}
