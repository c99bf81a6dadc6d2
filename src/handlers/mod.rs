//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Extracts the shared user directory and any path/query parameters
//! 2. Runs a projection over the records
//! 3. Returns the result as a JSON array

/// JSON 404 and 405 responses
pub mod fallback;
/// Liveness endpoint
pub mod health;
/// User projection endpoints
pub mod users;
