//! Inkwell Test Utils
//!
//! Provides shared testing utilities for the inkwell backend. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases plus factories for
//! inserting users, posts, tags, comments, follows and likes with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories used to arrange test data
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn likes_a_post() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_post_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (author, post) = factory::helpers::create_post_with_author(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
