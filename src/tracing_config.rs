use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{RemoteError, config::LogLevel};

/// Initialize tracing for a CLI invocation
///
/// Diagnostics go to stderr so stdout carries nothing but command output.
/// Uses the RUST_LOG environment variable if set, otherwise `level`.
/// Supports compact text and JSON output based on MPRIS_REMOTE_LOG_FORMAT.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init_cli_mode(level: LogLevel) -> Result<(), RemoteError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let format = env::var("MPRIS_REMOTE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format.as_str() {
        "json" => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        _ => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| RemoteError::Logging(e.to_string()))
}
