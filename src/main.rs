//! User Directory Service - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the user directory (users file or embedded seed)
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

use tracing_subscriber::EnvFilter;

use user_directory_server::{UserDirectory, build_router, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let directory = UserDirectory::from_config(&config)?;
    match &config.users_file {
        Some(path) => tracing::info!(
            users = directory.len(),
            "User directory loaded from {}",
            path.display()
        ),
        None => tracing::info!(users = directory.len(), "User directory seeded"),
    }

    let app = build_router(directory);

    // A port already in use is fatal: the error propagates out of main
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
