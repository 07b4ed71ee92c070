use crate::services::bus::BusError;

/// Errors that can occur while locating or talking to a player
#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    /// No MPRIS player is registered on the bus
    #[error("No media players are running")]
    NoPlayersRunning,

    /// The requested player is not among the running ones
    #[error("Player '{requested}' is not running")]
    RequestedPlayerNotRunning {
        /// Name the caller asked for
        requested: String,
        /// Bus names of every running player
        running: Vec<String>,
    },

    /// Several players are running and none was named
    #[error("Multiple players are running, choose one with --player")]
    AmbiguousPlayerSelection {
        /// Bus names of every running player
        running: Vec<String>,
    },

    /// The player answered with a reply of the wrong shape
    #[error("Unexpected reply to {method}: {details}")]
    UnexpectedReply {
        /// Method whose reply was rejected
        method: String,
        /// What was wrong with it
        details: String,
    },

    /// Transport failure, passed through unchanged
    #[error(transparent)]
    Bus(#[from] BusError),
}
