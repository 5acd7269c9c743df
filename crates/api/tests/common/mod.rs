#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use campsite_api::auth::jwt::{generate_access_token, JwtAuthenticator, JwtConfig};
use campsite_api::config::ServerConfig;
use campsite_api::router::build_app_router;
use campsite_api::state::AppState;
use campsite_core::types::DbId;
use campsite_db::memory::InMemoryStore;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_max_connections: 1,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// An application wired to an in-memory store the test can inspect.
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub state: AppState,
    config: ServerConfig,
}

impl TestApp {
    pub fn new() -> Self {
        let config = test_config();
        let store = Arc::new(InMemoryStore::new());
        let authenticator = Arc::new(JwtAuthenticator::new(config.jwt.clone()));
        let state = AppState::with_store(config.clone(), authenticator, store.clone());
        Self {
            store,
            state,
            config,
        }
    }

    /// Full router with the production middleware stack.
    pub fn router(&self) -> Router {
        build_app_router(self.state.clone(), &self.config)
    }

    /// Full router over `state`, for tests that swap a collaborator.
    pub fn router_with(&self, state: AppState) -> Router {
        build_app_router(state, &self.config)
    }

    /// A valid access token for `user_id`.
    pub fn token(&self, user_id: DbId) -> String {
        generate_access_token(user_id, &self.config.jwt).expect("token generation should succeed")
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn request_auth(app: Router, method: Method, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    request_auth(app, Method::GET, uri, token).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    request_auth(app, Method::POST, uri, token).await
}

pub async fn put_auth(app: Router, uri: &str, token: &str) -> Response {
    request_auth(app, Method::PUT, uri, token).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    request_auth(app, Method::DELETE, uri, token).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Body helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body should be JSON")
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).expect("body should be UTF-8")
}

/// The `Content-Type` header of a response, or an empty string.
pub fn content_type(response: &Response) -> String {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Extract `data.campsite_ids` from a record response.
pub fn campsite_ids(json: &serde_json::Value) -> Vec<DbId> {
    json["data"]["campsite_ids"]
        .as_array()
        .expect("campsite_ids should be an array")
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect()
}
