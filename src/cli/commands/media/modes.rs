use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        parsing::parse_bool,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::mpris::Remote,
};

/// Playback modes that can be switched on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMode {
    /// Restart the track list when it ends (`/TrackList SetLoop`)
    Loop,
    /// Play tracks in random order (`/TrackList SetRandom`)
    Random,
    /// Repeat the current track (`/Player Repeat`)
    Repeat,
}

impl PlayerMode {
    /// Every mode, in help order
    pub const ALL: [PlayerMode; 3] = [PlayerMode::Loop, PlayerMode::Random, PlayerMode::Repeat];

    fn keyword(self) -> &'static str {
        match self {
            PlayerMode::Loop => "loop",
            PlayerMode::Random => "random",
            PlayerMode::Repeat => "repeat",
        }
    }
}

/// Command to switch a playback mode on or off
pub struct ModeCommand {
    mode: PlayerMode,
}

impl ModeCommand {
    /// Creates a command for `mode`
    pub fn new(mode: PlayerMode) -> Self {
        Self { mode }
    }
}

#[async_trait]
impl Command for ModeCommand {
    async fn execute(&self, remote: &Remote, args: &[String]) -> CommandResult {
        let enabled = parse_bool(self.mode.keyword(), &args[0])?;

        match self.mode {
            PlayerMode::Loop => remote.set_loop(enabled).await?,
            PlayerMode::Random => remote.set_random(enabled).await?,
            PlayerMode::Repeat => remote.set_repeat(enabled).await?,
        }

        Ok(String::new())
    }

    fn metadata(&self) -> CommandMetadata {
        let description = match self.mode {
            PlayerMode::Loop => "Loop the whole track list",
            PlayerMode::Random => "Play tracks in random order",
            PlayerMode::Repeat => "Repeat the current track",
        };

        CommandMetadata {
            name: self.mode.keyword().to_string(),
            aliases: Vec::new(),
            description: description.to_string(),
            args: vec![CommandArg {
                name: "enabled".to_string(),
                description: "Whether the mode should be on".to_string(),
                required: true,
                value_type: ArgType::Boolean,
            }],
        }
    }
}
