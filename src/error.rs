//! Error types and HTTP error response handling.
//!
//! Projections cannot fail: every projection produces an array, using
//! `null` entries where a value is missing. `AppError` only covers requests
//! that match no route; `DirectoryError` covers building the user directory
//! at startup.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::path::PathBuf;

/// Errors returned to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No route matches the request path.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Route not found")]
    RouteNotFound,

    /// The path exists but not for the request method.
    ///
    /// Returns HTTP 405 Method Not Allowed.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "route_not_found",
///     "message": "Route not found"
///   }
/// }
/// ```
///
/// The body is always JSON, so the JSON content type added to every
/// response matches what the client receives.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, "route_not_found"),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed"),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}

/// Failure while loading the user directory.
///
/// # Error Categories
///
/// - **I/O Errors**: The users file could not be read
/// - **Parse Errors**: The file contents are not a JSON array of user records
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Reading the users file failed (missing file, permissions, ...).
    #[error("Failed to read users file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The users file is not valid JSON for `Vec<UserRecord>`.
    #[error("Failed to parse users file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
