//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types at the data boundary and
//! controllers convert them into DTOs at the HTTP boundary. Parameter types carry
//! validated, normalized input from controllers into services.

pub mod comment;
pub mod follow;
pub mod post;
pub mod tag;
pub mod toggle;
pub mod user;
