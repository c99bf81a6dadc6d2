//! Health check endpoint for service monitoring.

use crate::directory::UserDirectory;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Number of user records being served
    pub users: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "users": 2,
///   "timestamp": "2026-10-18T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(directory): State<UserDirectory>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        users: directory.len(),
        timestamp: Utc::now(),
    })
}
