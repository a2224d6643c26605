//! Shared utilities for the Slotkeeper backend.
//!
//! This crate provides functionality used across the other crates:
//! - Password hashing with Argon2id
//! - JWT access tokens (RS256)
//! - Wall-clock `HH:MM` parsing and serde helpers
//! - Common validation logic

pub mod jwt;
pub mod password;
pub mod validation;
pub mod wall_clock;
