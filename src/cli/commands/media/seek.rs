use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        parsing::parse_position,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::mpris::Remote,
};

/// Command to jump to a position in the current track
///
/// The position is an absolute offset in milliseconds. No upper bound is
/// checked here; the player decides what to do with positions past the end.
pub struct SeekCommand {}

impl SeekCommand {
    /// Creates a new SeekCommand
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command for SeekCommand {
    async fn execute(&self, remote: &Remote, args: &[String]) -> CommandResult {
        let position = parse_position(&args[0])?;

        remote.set_position(position).await?;

        Ok(String::new())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "seek".to_string(),
            aliases: Vec::new(),
            description: "Jump to a position in the current track".to_string(),
            args: vec![CommandArg {
                name: "position".to_string(),
                description: "Offset from the start of the track in milliseconds".to_string(),
                required: true,
                value_type: ArgType::Number,
            }],
        }
    }
}
