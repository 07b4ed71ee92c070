use std::path::Path;

use thiserror::Error;

/// Application-level errors for the mpris-remote front end.
///
/// Covers everything that can go wrong before a player is ever contacted:
/// locating and parsing the configuration file, and installing the log
/// subscriber.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: std::path::PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error (for compatibility)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParse {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Logging could not be initialised
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// A specialized `Result` type for mpris-remote operations.
pub type Result<T> = std::result::Result<T, RemoteError>;

impl RemoteError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        RemoteError::TomlParse {
            location,
            details: error.to_string(),
        }
    }
}
