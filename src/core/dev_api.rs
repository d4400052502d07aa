//! Fixture auth endpoints for local development.
//!
//! The real authentication service lives outside this application. When
//! `GATEFOLD_DEV_AUTH` is set these routes stand in for it so the page can
//! be exercised end to end: any well-formed login succeeds and any signup
//! is accepted. No sessions or tokens are issued.

use axum::{Json, Router, http::StatusCode, routing::post};

use crate::core::auth::{Credentials, SignupRequest};

/// Router carrying the fixture endpoints, mounted under `/api/auth`.
pub fn router() -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
}

async fn login(Json(credentials): Json<Credentials>) -> StatusCode {
    tracing::debug!(email = %credentials.email, "fixture login");
    if credentials.password.is_empty() {
        StatusCode::UNAUTHORIZED
    } else {
        StatusCode::OK
    }
}

async fn register(Json(request): Json<SignupRequest>) -> StatusCode {
    tracing::debug!(email = %request.email, "fixture signup");
    StatusCode::CREATED
}
