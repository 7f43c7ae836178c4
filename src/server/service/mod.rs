//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Uniqueness, ownership and toggle rules
//! - **Orchestration**: Coordinating repository calls inside transactions
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Notifications**: Triggering emails once the triggering write has committed

pub mod auth;
pub mod comment;
pub mod follow;
pub mod like;
pub mod notification;
pub mod post;
pub mod tag;
pub mod upload;
pub mod user;
