//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a Bearer token.

pub mod auth;
