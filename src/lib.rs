//! User Directory Service
//!
//! A small REST API serving a fixed, in-memory list of users. Each endpoint
//! projects one field of the records (names, locations, occupations,
//! hobbies) into a JSON array.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: Immutable `Arc<[UserRecord]>` built once at startup
//! - **Format**: JSON responses with permissive CORS headers

pub mod app;
pub mod config;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use app::build_router;
pub use directory::UserDirectory;
