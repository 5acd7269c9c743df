//! Request handlers.
//!
//! Handlers delegate to the collaborators held in [`crate::state::AppState`]
//! and map errors via [`crate::error::AppError`].

pub mod favorites;
