use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        parsing::{parse_bool, parse_unsigned},
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::mpris::Remote,
};

/// Command to print how many tracks are queued
pub struct NumTracksCommand {}

impl NumTracksCommand {
    /// Creates a new NumTracksCommand
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command for NumTracksCommand {
    async fn execute(&self, remote: &Remote, _args: &[String]) -> CommandResult {
        Ok(remote.track_count().await?.to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "numtracks".to_string(),
            aliases: Vec::new(),
            description: "Print the number of tracks in the list".to_string(),
            args: Vec::new(),
        }
    }
}

/// Command to print the position of the current track in the list
///
/// The protocol counts from 0; the printed number counts from 1 to match
/// the status header.
pub struct TrackNumCommand {}

impl TrackNumCommand {
    /// Creates a new TrackNumCommand
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command for TrackNumCommand {
    async fn execute(&self, remote: &Remote, _args: &[String]) -> CommandResult {
        Ok(remote.current_track().await?.saturating_add(1).to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "tracknum".to_string(),
            aliases: Vec::new(),
            description: "Print the 1-based number of the current track".to_string(),
            args: Vec::new(),
        }
    }
}

/// Command to append a track to the list
pub struct AddTrackCommand {}

impl AddTrackCommand {
    /// Creates a new AddTrackCommand
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command for AddTrackCommand {
    async fn execute(&self, remote: &Remote, args: &[String]) -> CommandResult {
        let uri = &args[0];
        let play_now = match args.get(1) {
            Some(flag) => parse_bool("play-now", flag)?,
            None => false,
        };

        remote.add_track(uri, play_now).await?;

        Ok(String::new())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "addtrack".to_string(),
            aliases: Vec::new(),
            description: "Append a URI to the track list".to_string(),
            args: vec![
                CommandArg {
                    name: "uri".to_string(),
                    description: "Location of the track".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "play-now".to_string(),
                    description: "Start playing the track immediately".to_string(),
                    required: false,
                    value_type: ArgType::Boolean,
                },
            ],
        }
    }
}

/// Command to remove a track from the list
pub struct DelTrackCommand {}

impl DelTrackCommand {
    /// Creates a new DelTrackCommand
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command for DelTrackCommand {
    async fn execute(&self, remote: &Remote, args: &[String]) -> CommandResult {
        let index = parse_unsigned("index", &args[0])?;

        remote.del_track(index).await?;

        Ok(String::new())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "deltrack".to_string(),
            aliases: Vec::new(),
            description: "Remove a track from the list".to_string(),
            args: vec![CommandArg {
                name: "index".to_string(),
                description: "0-based position of the track in the list".to_string(),
                required: true,
                value_type: ArgType::Number,
            }],
        }
    }
}
