//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::http::{header, Method};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // Sessions are cookie-backed, so CORS must allow credentials; that rules
    // out wildcard origins and methods.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        // API routes
        .route("/api/search", get(handlers::search))
        .route("/api/login", post(handlers::login))
        .route("/api/signup", post(handlers::signup))
        .route("/api/logout", post(handlers::logout))
        .route("/api/user", get(handlers::user))
        .route("/api/stats", get(handlers::stats))
        // Add middleware
        .layer(cors)
        // Add state
        .with_state(state)
}
