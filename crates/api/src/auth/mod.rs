//! Authentication primitives.
//!
//! - [`Authenticator`] -- the collaborator that turns a bearer token into an
//!   [`AuthUser`]. Injected through [`crate::state::AppState`].
//! - [`jwt`] -- HS256 access-token generation and validation, and the default
//!   [`jwt::JwtAuthenticator`].

pub mod jwt;

use campsite_core::error::CoreError;

use crate::middleware::auth::AuthUser;

/// Verifies a bearer token and identifies the caller.
pub trait Authenticator: Send + Sync {
    /// Return the authenticated user, or `CoreError::Unauthorized`.
    fn authenticate(&self, token: &str) -> Result<AuthUser, CoreError>;
}
