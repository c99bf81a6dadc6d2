//! The in-memory user directory.
//!
//! This module provides:
//! - The embedded seed records served by default
//! - Loading records from a JSON file named in the configuration
//!
//! The directory is built once in `main` and handed to the router as state.
//! It is never mutated afterwards.

use std::{fs, path::Path, sync::Arc};

use crate::{
    config::Config,
    error::DirectoryError,
    models::user::{HobbyRecord, UserRecord},
};

/// Immutable, ordered collection of user records.
///
/// Cloning is a reference-count bump, so the directory can be passed to
/// every handler through `State` without copying records.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    records: Arc<[UserRecord]>,
}

impl UserDirectory {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// The records served when no users file is configured.
    pub fn seed() -> Self {
        Self::new(vec![
            UserRecord {
                name: "Donald Duck".to_string(),
                location: "NYC".to_string(),
                occupation: vec![
                    "dipping".to_string(),
                    "diving".to_string(),
                    "dodging".to_string(),
                ],
                hobbies: vec![
                    HobbyRecord::new("Chilling", "current"),
                    HobbyRecord::new("swimming", "past"),
                ],
            },
            UserRecord {
                name: "Mickey Mouse".to_string(),
                location: "Orlando".to_string(),
                occupation: vec![
                    "hosting".to_string(),
                    "smiling".to_string(),
                    "dancing".to_string(),
                ],
                hobbies: vec![
                    HobbyRecord::new("Hangin with Minnie", "current"),
                    HobbyRecord::new("Billiards", "past"),
                ],
            },
        ])
    }

    /// Load records from a file containing a JSON array of users.
    ///
    /// # Errors
    ///
    /// - `DirectoryError::Io` if the file cannot be read
    /// - `DirectoryError::Parse` if the contents are not a valid user array
    pub fn from_json_file(path: &Path) -> Result<Self, DirectoryError> {
        let contents = fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<UserRecord> =
            serde_json::from_str(&contents).map_err(|source| DirectoryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new(records))
    }

    /// Build the directory selected by the configuration.
    pub fn from_config(config: &Config) -> Result<Self, DirectoryError> {
        match &config.users_file {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::seed()),
        }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
