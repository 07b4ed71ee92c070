use serde::{Deserialize, Serialize};
use std::fmt;

/// Logging level for the application.
///
/// Controls the verbosity of diagnostics written to stderr, from critical
/// errors only to detailed trace information.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only show errors that abort the invocation.
    Error,

    /// Show warnings and errors (default level).
    #[default]
    Warn,

    /// Show informational messages such as the selected player.
    Info,

    /// Show discovery results and decoded replies.
    Debug,

    /// Show every bus call issued (very verbose).
    Trace,
}

impl LogLevel {
    /// Returns the level `steps` notches more verbose, saturating at `Trace`.
    pub fn raised(self, steps: u8) -> Self {
        const ORDER: [LogLevel; 5] = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];

        let current = ORDER.iter().position(|level| *level == self).unwrap_or(1);
        let raised = (current + usize::from(steps)).min(ORDER.len() - 1);
        ORDER[raised]
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
