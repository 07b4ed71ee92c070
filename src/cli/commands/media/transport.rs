use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::mpris::Remote,
};

/// Argument-less procedures on the root and player objects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportAction {
    /// `/ Identity`
    Identity,
    /// `/ Quit`
    Quit,
    /// `/Player Prev`
    Prev,
    /// `/Player Next`
    Next,
    /// `/Player Stop`
    Stop,
    /// `/Player Play`
    Play,
    /// `/Player Pause`
    Pause,
}

impl TransportAction {
    /// Every action, in help order
    pub const ALL: [TransportAction; 7] = [
        TransportAction::Identity,
        TransportAction::Quit,
        TransportAction::Prev,
        TransportAction::Next,
        TransportAction::Stop,
        TransportAction::Play,
        TransportAction::Pause,
    ];

    fn keyword(self) -> &'static str {
        match self {
            TransportAction::Identity => "identity",
            TransportAction::Quit => "quit",
            TransportAction::Prev => "prev",
            TransportAction::Next => "next",
            TransportAction::Stop => "stop",
            TransportAction::Play => "play",
            TransportAction::Pause => "pause",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            TransportAction::Prev => &["previous"],
            _ => &[],
        }
    }

    fn description(self) -> &'static str {
        match self {
            TransportAction::Identity => "Print the player's name and version",
            TransportAction::Quit => "Ask the player to exit",
            TransportAction::Prev => "Skip to the previous track",
            TransportAction::Next => "Skip to the next track",
            TransportAction::Stop => "Stop playback",
            TransportAction::Play => "Start playback",
            TransportAction::Pause => "Pause playback",
        }
    }
}

/// Command that fires one argument-less procedure
///
/// Rejects any argument (the registry enforces this from the empty
/// argument list in the metadata).
pub struct TransportCommand {
    action: TransportAction,
}

impl TransportCommand {
    /// Creates a command for `action`
    pub fn new(action: TransportAction) -> Self {
        Self { action }
    }
}

#[async_trait]
impl Command for TransportCommand {
    async fn execute(&self, remote: &Remote, _args: &[String]) -> CommandResult {
        match self.action {
            TransportAction::Identity => return Ok(remote.identity().await?),
            TransportAction::Quit => remote.quit().await?,
            TransportAction::Prev => remote.prev().await?,
            TransportAction::Next => remote.next().await?,
            TransportAction::Stop => remote.stop().await?,
            TransportAction::Play => remote.play().await?,
            TransportAction::Pause => remote.pause().await?,
        }

        Ok(String::new())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: self.action.keyword().to_string(),
            aliases: self
                .action
                .aliases()
                .iter()
                .map(|alias| alias.to_string())
                .collect(),
            description: self.action.description().to_string(),
            args: Vec::new(),
        }
    }
}
