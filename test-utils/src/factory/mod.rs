//! Entity factories for arranging test data.
//!
//! Each factory inserts an entity with sensible defaults and exposes builder methods for
//! the fields a test cares about. Every module also offers a `create_*` shorthand for
//! the common case of "any valid row will do".

pub mod comment;
pub mod follow;
pub mod helpers;
pub mod post;
pub mod post_like;
pub mod tag;
pub mod user;
