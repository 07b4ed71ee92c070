use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        parsing::parse_volume,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::mpris::Remote,
};

/// Command to set the player volume
pub struct VolumeCommand {}

impl VolumeCommand {
    /// Creates a new VolumeCommand
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command for VolumeCommand {
    /// Sets the volume
    ///
    /// # Arguments
    ///
    /// * `args` - [level]
    ///
    /// # Errors
    ///
    /// Returns CliError if:
    /// - The level is not a plain decimal integer
    /// - The level is above 100
    /// - The player call fails
    async fn execute(&self, remote: &Remote, args: &[String]) -> CommandResult {
        let level = parse_volume(&args[0])?;

        remote.set_volume(level).await?;

        Ok(String::new())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "volume".to_string(),
            aliases: Vec::new(),
            description: "Set the volume".to_string(),
            args: vec![CommandArg {
                name: "level".to_string(),
                description: "Volume level (0 to 100)".to_string(),
                required: true,
                value_type: ArgType::Number,
            }],
        }
    }
}
