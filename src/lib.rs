//! mpris-remote - command-line remote control for MPRIS media players.
//!
//! Each invocation finds one player on the session bus, runs one command
//! against it and exits. The pieces are usable on their own:
//!
//! - [`services::bus`] - the bus capability and its zbus implementation
//! - [`services::mpris`] - player discovery, the player session and
//!   status formatting
//! - [`cli`] - command registry and argument validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mpris_remote::{
//!     cli::CliService,
//!     services::bus::{BusClient, DbusClient},
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let bus: Arc<dyn BusClient> = Arc::new(DbusClient::session().await?);
//! let output = CliService::new(bus)
//!     .execute_command(Some("audacious"), Some("next"), &[])
//!     .await?;
//! print!("{output}");
//! # Ok(())
//! # }
//! ```

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface for player control.
pub mod cli;

/// Bus access and player services.
pub mod services;

/// Log subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{RemoteError, Result};
