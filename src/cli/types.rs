use async_trait::async_trait;
use thiserror::Error;

use crate::services::mpris::{MediaError, Remote};

/// Errors that can occur during CLI command execution.
///
/// Each variant maps to its own process exit code so scripts can tell a
/// typo apart from a player that is not running.
#[derive(Error, Debug)]
pub enum CliError {
    /// The command line itself is wrong.
    ///
    /// Unknown commands, the wrong number of arguments, and argument values
    /// that fail validation all end up here. No further bus calls are made
    /// once this is returned.
    #[error("Bad input: {0}")]
    BadUserInput(String),

    /// Locating or talking to the player failed.
    #[error(transparent)]
    Media(#[from] MediaError),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::BadUserInput(_) => 2,
            CliError::Media(MediaError::NoPlayersRunning) => 3,
            CliError::Media(MediaError::RequestedPlayerNotRunning { .. }) => 4,
            CliError::Media(MediaError::AmbiguousPlayerSelection { .. }) => 5,
            CliError::Media(_) => 1,
        }
    }
}

/// Type alias for command execution results.
///
/// All CLI commands return this type, providing either the text to print
/// (possibly empty) or a CliError describing what went wrong.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
///
/// This struct defines the metadata for command arguments, enabling
/// automatic help generation and arity validation.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "level", "uri").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A non-negative base-10 integer.
    Number,

    /// Literally `true` or `false`.
    Boolean,
}

impl ArgType {
    /// Placeholder shown in usage lines.
    pub fn hint(self) -> &'static str {
        match self {
            ArgType::String => "text",
            ArgType::Number => "n",
            ArgType::Boolean => "true|false",
        }
    }
}

/// Complete metadata for a CLI command.
///
/// This struct serves as the single source of truth for everything about
/// a command: its names, arguments and help text. The registry uses it for
/// help generation and arity validation.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command keyword (e.g., "play", "volume").
    pub name: String,

    /// Other keywords that run the same command.
    pub aliases: Vec<String>,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive the session for the already-located player and must
/// issue at most one call on it per execution.
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against the
    /// command's metadata; the command validates the values themselves.
    ///
    /// # Errors
    ///
    /// Returns `CliError::BadUserInput` for invalid argument values and
    /// `CliError::Media` when the player call fails.
    async fn execute(&self, remote: &Remote, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
