//! Request guards.
//!
//! `auth::AuthGuard` resolves the `Authorization: Token <key>` header to a user. Handlers
//! call it directly so that public and protected methods can share a route.

pub mod auth;
