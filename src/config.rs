//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8989
/// - `USERS_FILE` (optional): JSON file holding the user records. When unset,
///   the embedded seed records are served.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default)]
    pub users_file: Option<PathBuf>,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    8989
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    /// (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        envy::from_env::<Config>()
    }

    /// Parse configuration from an explicit list of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
