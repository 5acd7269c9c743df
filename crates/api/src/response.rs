//! Shared response types for API handlers.
//!
//! Record payloads use a `{ "data": ... }` envelope. Informational no-op
//! outcomes are plain text with a 200 status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use campsite_core::favorites::FavoriteNotice;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Wrap a payload in [`DataResponse`] and render it as JSON.
pub fn data<T: Serialize>(data: T) -> Response {
    Json(DataResponse { data }).into_response()
}

/// Render a notice as a `text/plain` 200 response.
pub fn notice(notice: FavoriteNotice) -> Response {
    (StatusCode::OK, notice.to_string()).into_response()
}
