/// Player control commands
mod modes;
mod seek;
mod status;
mod tracklist;
mod transport;
mod volume;

pub use modes::{ModeCommand, PlayerMode};
pub use seek::SeekCommand;
pub use status::{PlayStatusCommand, PositionCommand, StatusCommand, TrackInfoCommand};
pub use tracklist::{AddTrackCommand, DelTrackCommand, NumTracksCommand, TrackNumCommand};
pub use transport::{TransportAction, TransportCommand};
pub use volume::VolumeCommand;

use crate::cli::CommandRegistry;

/// Registers all player commands with the command registry
///
/// Registration order is the order `help` lists them in.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
pub fn register_commands(registry: &mut CommandRegistry) {
    for action in TransportAction::ALL {
        registry.register_command(Box::new(TransportCommand::new(action)));
    }

    registry.register_command(Box::new(VolumeCommand::new()));
    registry.register_command(Box::new(SeekCommand::new()));

    registry.register_command(Box::new(StatusCommand::new()));
    registry.register_command(Box::new(PlayStatusCommand::new()));
    registry.register_command(Box::new(TrackInfoCommand::new()));
    registry.register_command(Box::new(PositionCommand::new()));

    registry.register_command(Box::new(NumTracksCommand::new()));
    registry.register_command(Box::new(TrackNumCommand::new()));
    registry.register_command(Box::new(AddTrackCommand::new()));
    registry.register_command(Box::new(DelTrackCommand::new()));

    for mode in PlayerMode::ALL {
        registry.register_command(Box::new(ModeCommand::new(mode)));
    }
}
