//! Request and response bodies shared by the HTTP API.
//!
//! These types are the wire format: they derive `serde` traits for (de)serialization and
//! `utoipa::ToSchema` for the generated OpenAPI document. Server code converts them to and
//! from domain models at the controller boundary.

pub mod api;
pub mod comment;
pub mod post;
pub mod upload;
pub mod user;
