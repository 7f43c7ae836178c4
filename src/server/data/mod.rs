//! Persistence layer.
//!
//! Repository structs handle database operations for each domain. They use SeaORM entity
//! models internally and return domain models, keeping entities out of the service layer.
//! Repositories are generic over `ConnectionTrait` so services can run them inside a
//! transaction. `media` stores uploaded files on the local filesystem.

pub mod auth_token;
pub mod comment;
pub mod follow;
pub mod media;
pub mod post;
pub mod post_like;
pub mod tag;
pub mod user;
