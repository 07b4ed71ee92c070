use std::{collections::HashMap, sync::Arc};

use tracing::instrument;

use crate::services::mpris::Remote;

use super::{
    CliError, Command, CommandResult,
    commands,
    formatting::{format_command, format_description, format_header, format_usage},
    types::CommandMetadata,
};

/// Registry for CLI commands keyed by keyword.
///
/// Aliases point at the same command instance as its primary name, so
/// `prev` and `previous` share one implementation.
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
    primary: Vec<String>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            primary: Vec::new(),
        }
    }

    /// Creates a registry holding every built-in command.
    pub fn with_builtin_commands() -> Self {
        let mut registry = Self::new();
        commands::register_commands(&mut registry);
        registry
    }

    /// Registers a command under its name and all of its aliases.
    ///
    /// A command registered under an existing keyword replaces it.
    pub fn register_command(&mut self, command: Box<dyn Command>) {
        let command: Arc<dyn Command> = Arc::from(command);
        let metadata = command.metadata();

        if !self.primary.contains(&metadata.name) {
            self.primary.push(metadata.name.clone());
        }
        for alias in &metadata.aliases {
            self.commands.insert(alias.clone(), Arc::clone(&command));
        }
        self.commands.insert(metadata.name, command);
    }

    /// Whether `command_name` is a registered keyword or alias.
    pub fn contains(&self, command_name: &str) -> bool {
        self.commands.contains_key(command_name)
    }

    /// Validates the arguments and runs the command against `remote`.
    ///
    /// # Errors
    ///
    /// Returns `CliError::BadUserInput` if the command is unknown or the
    /// argument count does not match its metadata. Other errors come from
    /// the command itself.
    #[instrument(skip(self, remote))]
    pub async fn execute(&self, command_name: &str, args: &[String], remote: &Remote) -> CommandResult {
        let found_command = self
            .commands
            .get(command_name)
            .ok_or_else(|| CliError::BadUserInput(format!("Unknown command '{command_name}'")))?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(remote, args).await
    }

    /// Lists primary command names in registration order.
    pub fn list_commands(&self) -> Vec<String> {
        self.primary.clone()
    }

    /// Renders the help listing for every command.
    pub fn help_text(&self) -> String {
        let mut output = format!(
            "{}\n  mpris-remote [--player NAME] [COMMAND [ARGS...]]\n\n",
            format_header("Usage:")
        );
        output.push_str(&format!("{}\n", format_header("Commands:")));

        for name in &self.primary {
            let Some(command) = self.commands.get(name) else {
                continue;
            };
            let metadata = command.metadata();
            output.push_str(&format!(
                "  {} {}\n      {}\n",
                format_command(&Self::usage(&metadata)),
                Self::alias_note(&metadata),
                format_description(&metadata.description),
            ));
        }

        output.push_str(&format!(
            "\n{}\n",
            format_usage("Without a command, the current track and status are shown.")
        ));
        output
    }

    fn usage(metadata: &CommandMetadata) -> String {
        let mut usage = metadata.name.clone();
        for arg in &metadata.args {
            let hint = format!("{}:{}", arg.name, arg.value_type.hint());
            if arg.required {
                usage.push_str(&format!(" <{hint}>"));
            } else {
                usage.push_str(&format!(" [{hint}]"));
            }
        }
        usage
    }

    fn alias_note(metadata: &CommandMetadata) -> String {
        if metadata.aliases.is_empty() {
            String::new()
        } else {
            format_usage(&format!("(alias: {})", metadata.aliases.join(", ")))
        }
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::BadUserInput(format!(
                "'{}' expects at least {} arguments, got {}",
                metadata.name,
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::BadUserInput(format!(
                "'{}' expects at most {} arguments, got {}",
                metadata.name,
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
