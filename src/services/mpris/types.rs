use std::fmt;

use crate::services::bus::{BusValue, SERVICE_PREFIX};

use super::MediaError;

/// Bus identity of the player an invocation is bound to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerHandle(String);

impl PlayerHandle {
    /// Create a PlayerHandle from a D-Bus bus name
    pub fn from_bus_name(bus_name: &str) -> Self {
        Self(bus_name.to_string())
    }

    /// Get the D-Bus bus name
    pub fn bus_name(&self) -> &str {
        &self.0
    }

    /// The bus name without the MPRIS service prefix
    pub fn short_name(&self) -> &str {
        self.0.strip_prefix(SERVICE_PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current playback state of a media player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Player is currently playing
    Playing,

    /// Player is paused
    Paused,

    /// Player is stopped
    Stopped,

    /// A state code outside the protocol's three
    Other(i64),
}

impl PlaybackState {
    /// Display word for the state.
    ///
    /// The protocol only singles out playing; every other state shares a label.
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Playing => "playing",
            PlaybackState::Paused | PlaybackState::Stopped | PlaybackState::Other(_) => {
                "not playing"
            }
        }
    }
}

impl From<i64> for PlaybackState {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::Playing,
            1 => Self::Paused,
            2 => Self::Stopped,
            other => Self::Other(other),
        }
    }
}

/// Decoded `GetStatus` reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackStatus {
    /// Whether the player is playing, paused or stopped
    pub state: PlaybackState,

    /// Tracks are picked in random order
    pub shuffle: bool,

    /// The current track repeats
    pub repeat_track: bool,

    /// The whole list restarts when it ends
    pub repeat_list: bool,
}

impl TryFrom<&BusValue> for PlaybackStatus {
    type Error = MediaError;

    fn try_from(value: &BusValue) -> Result<Self, Self::Error> {
        let malformed = |details: String| MediaError::UnexpectedReply {
            method: "GetStatus".to_string(),
            details,
        };

        let fields = value
            .fields()
            .ok_or_else(|| malformed(format!("expected a structure, got {value:?}")))?;

        let flags = fields
            .iter()
            .map(BusValue::as_i64)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| malformed(format!("expected integer fields, got {value:?}")))?;

        let &[state, shuffle, repeat_track, repeat_list] = flags.as_slice() else {
            return Err(malformed(format!("expected 4 fields, got {}", flags.len())));
        };

        Ok(Self {
            state: PlaybackState::from(state),
            shuffle: shuffle != 0,
            repeat_track: repeat_track != 0,
            repeat_list: repeat_list != 0,
        })
    }
}
