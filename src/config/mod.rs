//! Configuration schema definitions and loading.
//!
//! The remote reads an optional TOML file from the XDG config directory.
//! Every field has a default, so a missing file is never an error.

mod general;
mod paths;
mod player;

pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use player::PlayerConfig;

use std::{fs, io::ErrorKind, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{RemoteError, Result};

/// Main configuration structure for mpris-remote.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RemoteConfig {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Player selection settings.
    #[serde(default)]
    pub player: PlayerConfig,
}

impl RemoteConfig {
    /// Loads the configuration from the default location.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&ConfigPaths::main_config()?)
    }

    /// Loads the configuration from `path`, falling back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    /// Returns `RemoteError::IoError` if the file cannot be read and
    /// `RemoteError::TomlParse` if its contents are not a valid config.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(RemoteError::IoError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                });
            }
        };

        toml::from_str(&content).map_err(|e| RemoteError::toml_parse(e, Some(path)))
    }
}

#[cfg(test)]
mod tests;
