use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::services::{
    bus::BusClient,
    mpris::{PlayerLocator, Remote},
};

use super::{CommandRegistry, CommandResult};

/// Keyword that prints the command listing without touching the bus.
pub const HELP_COMMAND: &str = "help";

/// Keyword run when the user gives no command.
pub const DEFAULT_COMMAND: &str = "status";

/// High-level service that runs one discovery-then-command cycle.
///
/// Locates the player, opens a session with it and hands the command to
/// the registry. All bus traffic goes through the injected `BusClient`.
pub struct CliService {
    bus: Arc<dyn BusClient>,
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all built-in commands registered.
    ///
    /// # Arguments
    /// * `bus` - Bus connection shared by discovery and the player session
    pub fn new(bus: Arc<dyn BusClient>) -> Self {
        Self {
            bus,
            registry: CommandRegistry::with_builtin_commands(),
        }
    }

    /// Runs `command` against the player selected by `player`.
    ///
    /// `help` is answered locally. Any other keyword first resolves the
    /// player, then opens a session (which probes the track list), then
    /// dispatches.
    ///
    /// # Arguments
    /// * `player` - Requested player name, or `None` for the only running one
    /// * `command` - Command keyword; `None` shows the status summary
    /// * `args` - Raw arguments for the command
    ///
    /// # Errors
    /// Returns `CliError::Media` if the player cannot be located or a call
    /// fails, and `CliError::BadUserInput` if the command line is invalid.
    #[instrument(skip(self))]
    pub async fn execute_command(
        &self,
        player: Option<&str>,
        command: Option<&str>,
        args: &[String],
    ) -> CommandResult {
        let command = command.unwrap_or(DEFAULT_COMMAND);
        if command == HELP_COMMAND {
            return Ok(self.registry.help_text());
        }

        let mut locator = PlayerLocator::new(Arc::clone(&self.bus));
        let handle = match locator.find_player(player).await {
            Ok(handle) => handle,
            Err(e) => {
                warn!(running = ?locator.running_players(), "Could not select a player");
                return Err(e.into());
            }
        };

        let remote = Remote::connect(Arc::clone(&self.bus), handle).await?;
        debug!(player = %remote.player().short_name(), command, "Dispatching command");
        self.registry.execute(command, args, &remote).await
    }
}
