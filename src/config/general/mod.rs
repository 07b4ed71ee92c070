mod log_level;

pub use log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// General configuration settings for mpris-remote.
///
/// Contains global settings that affect the overall behavior of the application,
/// such as logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GeneralConfig {
    /// Logging level for the application.
    #[serde(default)]
    pub log_level: LogLevel,
}
