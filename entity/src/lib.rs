//! SeaORM entities for the inkwell schema.

pub mod prelude;

pub mod auth_token;
pub mod comment;
pub mod follow;
pub mod post;
pub mod post_like;
pub mod post_tag;
pub mod tag;
pub mod user;
