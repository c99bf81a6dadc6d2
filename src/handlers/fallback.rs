//! Fallback handlers for requests no route accepts.

use crate::error::AppError;

/// Handler for paths with no route.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

/// Handler for known paths requested with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
