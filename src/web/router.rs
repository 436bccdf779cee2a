use axum::http::Method;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{health, servers};
use crate::listings::ServerBrowser;

/// Browser clients call this proxy cross-origin, so the listing endpoint is
/// served with a permissive read-only CORS policy.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any)
        .allow_headers(Any)
}

pub fn build_router(browser: Arc<ServerBrowser>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/servers", get(servers))
        .layer(build_cors_layer())
        .with_state(browser)
}
