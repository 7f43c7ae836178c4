//! HTTP request handlers.
//!
//! Controllers authenticate the request when needed, convert DTOs into validated
//! parameters, call a service and convert the resulting domain model back into a DTO.

pub mod auth;
pub mod comment;
pub mod follow;
pub mod like;
pub mod post;
pub mod tag;
pub mod upload;
pub mod user;
