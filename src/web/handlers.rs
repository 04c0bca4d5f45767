//! HTTP request handlers

use super::error::ApiError;
use super::state::AppState;
use crate::listing::Listing;
use crate::matcher;
use crate::session::SESSION_COOKIE;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{AppendHeaders, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,
}

/// Search results response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<Listing>,
    pub best_price: Option<Listing>,
    pub count: usize,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Signup request body
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Health banner handler
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "message": state.instance_name(),
        "status": "OK"
    }))
}

/// Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Search handler: catalog match, generated fallback, best price
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = matcher::normalize(params.q.as_deref().unwrap_or(""));
    if query.is_empty() {
        return Err(ApiError::Validation(
            "Query parameter is required".to_string(),
        ));
    }

    let outcome = state.pipeline.execute(&query);
    let count = outcome.results.len();

    Ok(Json(SearchResponse {
        query,
        results: outcome.results,
        best_price: outcome.best_price,
        count,
    }))
}

/// Login handler; opens a session on success
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let profile = state.users.login(&email, &password)?;
    state.metrics.inc_login();
    tracing::info!("login for {}", profile.email);

    let token = state.sessions.create(&profile.email);
    Ok((
        AppendHeaders([(header::SET_COOKIE, session_cookie(&token))]),
        Json(serde_json::json!({
            "message": "Login successful",
            "user": profile
        })),
    ))
}

/// Signup handler; stores the account and opens a session
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();
    let name = body.name.unwrap_or_default();
    if email.is_empty() || password.is_empty() || name.is_empty() {
        return Err(ApiError::Validation(
            "Name, email and password are required".to_string(),
        ));
    }

    let profile = state.users.signup(&email, &password, &name)?;
    state.metrics.inc_signup();
    tracing::info!("new account {}", profile.email);

    let token = state.sessions.create(&profile.email);
    Ok((
        AppendHeaders([(header::SET_COOKIE, session_cookie(&token))]),
        Json(serde_json::json!({
            "message": "User created successfully",
            "user": profile
        })),
    ))
}

/// Logout handler; revokes the session and clears the cookie
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token(&headers) {
        state.sessions.revoke(&token);
    }

    (
        AppendHeaders([(header::SET_COOKIE, clear_session_cookie())]),
        Json(serde_json::json!({ "message": "Logged out successfully" })),
    )
}

/// Current-user handler
pub async fn user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let profile = session_token(&headers)
        .and_then(|token| state.sessions.get(&token))
        .and_then(|email| state.users.get(&email))
        .ok_or_else(|| ApiError::Auth("Not logged in".to_string()))?;

    Ok(Json(profile))
}

/// Metrics snapshot handler
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.snapshot())
}

/// Extract the session token from the Cookie header
fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|cookie| {
        let (name, value) = cookie.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0")
}
