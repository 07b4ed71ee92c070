use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::mpris::{Remote, compact_status, status::format_minutes, verbose_status},
};

/// Command to show the current track and playback state
///
/// This is what runs when no command is given.
pub struct StatusCommand {}

impl StatusCommand {
    /// Creates a new StatusCommand
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, remote: &Remote, _args: &[String]) -> CommandResult {
        Ok(verbose_status(remote).await?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            aliases: Vec::new(),
            description: "Show the current track, position and modes".to_string(),
            args: Vec::new(),
        }
    }
}

/// Command to show the playback state flags
pub struct PlayStatusCommand {}

impl PlayStatusCommand {
    /// Creates a new PlayStatusCommand
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command for PlayStatusCommand {
    async fn execute(&self, remote: &Remote, _args: &[String]) -> CommandResult {
        Ok(compact_status(remote).await?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "playstatus".to_string(),
            aliases: Vec::new(),
            description: "Show whether the player is playing and which modes are on".to_string(),
            args: Vec::new(),
        }
    }
}

/// Command to dump every metadata field of the current track
pub struct TrackInfoCommand {}

impl TrackInfoCommand {
    /// Creates a new TrackInfoCommand
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command for TrackInfoCommand {
    async fn execute(&self, remote: &Remote, _args: &[String]) -> CommandResult {
        let metadata = remote.metadata().await?;

        let mut output = String::new();
        for (key, value) in metadata.iter() {
            output.push_str(&format!("{key}: {value}\n"));
        }

        Ok(output)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "trackinfo".to_string(),
            aliases: Vec::new(),
            description: "Print all metadata of the current track".to_string(),
            args: Vec::new(),
        }
    }
}

/// Command to print the elapsed time in the current track
pub struct PositionCommand {}

impl PositionCommand {
    /// Creates a new PositionCommand
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command for PositionCommand {
    async fn execute(&self, remote: &Remote, _args: &[String]) -> CommandResult {
        let millis = remote.position_millis().await?;
        Ok(format_minutes(millis / 1000))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "position".to_string(),
            aliases: Vec::new(),
            description: "Print the elapsed time in the current track".to_string(),
            args: Vec::new(),
        }
    }
}
