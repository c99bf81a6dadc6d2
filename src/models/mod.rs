//! Data models served by the API.
//!
//! All records are read-only once the directory is built.

/// User and hobby records
pub mod user;
