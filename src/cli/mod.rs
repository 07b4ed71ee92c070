//! Command-line interface for controlling a player.
//!
//! Commands are looked up by keyword in a registry, validated against
//! their metadata and run against a session with the located player.

mod commands;
pub mod formatting;
pub mod parsing;
mod registry;
mod service;
mod types;

pub use registry::CommandRegistry;
pub use service::{CliService, DEFAULT_COMMAND, HELP_COMMAND};
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};

#[cfg(test)]
mod tests;
