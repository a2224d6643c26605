//! HTTP route handlers.

pub mod admin;
pub mod auth;
pub mod events;
pub mod groups;
pub mod health;
pub mod registrations;
pub mod slots;
pub mod users;
