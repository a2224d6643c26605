//! Custom Axum extractors.
//!
//! Handlers take [`UserAuth`](crate::middleware::UserAuth) directly; the
//! `FromRequestParts` impl lives here.

pub mod user_auth;
