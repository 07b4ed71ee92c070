use std::sync::Arc;

use tracing::{debug, instrument};

use crate::services::bus::{Arg, BusClient, BusValue, MPRIS_INTERFACE, ObjectPath};

use super::{MediaError, PlaybackStatus, PlayerHandle, TrackMetadata};

/// Remote-control session bound to one player
///
/// Every method maps to exactly one procedure on the player and issues it
/// immediately; nothing is cached between calls.
pub struct Remote {
    bus: Arc<dyn BusClient>,
    player: PlayerHandle,
}

impl Remote {
    /// Open a session with `player`
    ///
    /// Probes the track list length once so an unresponsive player is
    /// reported before any command runs.
    ///
    /// # Errors
    /// Returns error if the probe call fails
    #[instrument(skip(bus, player), fields(player = %player))]
    pub async fn connect(bus: Arc<dyn BusClient>, player: PlayerHandle) -> Result<Self, MediaError> {
        let remote = Self { bus, player };
        let tracks = remote.track_count().await?;
        debug!(tracks, "Player responded to probe");

        Ok(remote)
    }

    /// The player this session controls
    pub fn player(&self) -> &PlayerHandle {
        &self.player
    }

    /// Human-readable player name (`/ Identity`)
    ///
    /// # Errors
    /// Returns error if the call fails or the reply is not a string
    pub async fn identity(&self) -> Result<String, MediaError> {
        let reply = self.call(ObjectPath::Root, "Identity", &[]).await?;
        reply
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| unexpected("Identity", "string", &reply))
    }

    /// Ask the player to exit (`/ Quit`)
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn quit(&self) -> Result<(), MediaError> {
        self.call(ObjectPath::Root, "Quit", &[]).await.map(drop)
    }

    /// Skip to the previous track (`/Player Prev`)
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn prev(&self) -> Result<(), MediaError> {
        self.call(ObjectPath::Player, "Prev", &[]).await.map(drop)
    }

    /// Skip to the next track (`/Player Next`)
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn next(&self) -> Result<(), MediaError> {
        self.call(ObjectPath::Player, "Next", &[]).await.map(drop)
    }

    /// Stop playback (`/Player Stop`)
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn stop(&self) -> Result<(), MediaError> {
        self.call(ObjectPath::Player, "Stop", &[]).await.map(drop)
    }

    /// Start playback (`/Player Play`)
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn play(&self) -> Result<(), MediaError> {
        self.call(ObjectPath::Player, "Play", &[]).await.map(drop)
    }

    /// Pause playback (`/Player Pause`)
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn pause(&self) -> Result<(), MediaError> {
        self.call(ObjectPath::Player, "Pause", &[]).await.map(drop)
    }

    /// Set the volume in percent (`/Player VolumeSet`)
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn set_volume(&self, volume: u8) -> Result<(), MediaError> {
        self.call(ObjectPath::Player, "VolumeSet", &[Arg::Int(i64::from(volume))])
            .await
            .map(drop)
    }

    /// Jump to `millis` into the current track (`/Player PositionSet`)
    ///
    /// # Errors
    /// Returns error if the call fails or the transport cannot carry the value
    pub async fn set_position(&self, millis: i64) -> Result<(), MediaError> {
        self.call(ObjectPath::Player, "PositionSet", &[Arg::Int(millis)])
            .await
            .map(drop)
    }

    /// Milliseconds elapsed in the current track (`/Player PositionGet`)
    ///
    /// # Errors
    /// Returns error if the call fails or the reply is not an integer
    pub async fn position_millis(&self) -> Result<i64, MediaError> {
        self.integer(ObjectPath::Player, "PositionGet").await
    }

    /// Playback state and mode flags (`/Player GetStatus`)
    ///
    /// # Errors
    /// Returns error if the call fails or the reply is malformed
    pub async fn status(&self) -> Result<PlaybackStatus, MediaError> {
        let reply = self.call(ObjectPath::Player, "GetStatus", &[]).await?;
        PlaybackStatus::try_from(&reply)
    }

    /// Metadata of the current track (`/Player GetMetadata`)
    ///
    /// An empty reply is treated as a track without metadata.
    ///
    /// # Errors
    /// Returns error if the call fails or the reply is not a dictionary
    pub async fn metadata(&self) -> Result<TrackMetadata, MediaError> {
        let reply = self.call(ObjectPath::Player, "GetMetadata", &[]).await?;
        match reply {
            BusValue::Unit => Ok(TrackMetadata::default()),
            BusValue::Dict(entries) => Ok(TrackMetadata::from(entries)),
            other => Err(unexpected("GetMetadata", "dictionary", &other)),
        }
    }

    /// Turn single-track repeat on or off (`/Player Repeat`)
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn set_repeat(&self, enabled: bool) -> Result<(), MediaError> {
        self.call(ObjectPath::Player, "Repeat", &[Arg::Bool(enabled)])
            .await
            .map(drop)
    }

    /// Number of tracks in the list (`/TrackList GetLength`)
    ///
    /// # Errors
    /// Returns error if the call fails or the reply is not an integer
    pub async fn track_count(&self) -> Result<i64, MediaError> {
        self.integer(ObjectPath::TrackList, "GetLength").await
    }

    /// 0-based index of the current track (`/TrackList GetCurrentTrack`)
    ///
    /// # Errors
    /// Returns error if the call fails or the reply is not an integer
    pub async fn current_track(&self) -> Result<i64, MediaError> {
        self.integer(ObjectPath::TrackList, "GetCurrentTrack").await
    }

    /// Turn list looping on or off (`/TrackList SetLoop`)
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn set_loop(&self, enabled: bool) -> Result<(), MediaError> {
        self.call(ObjectPath::TrackList, "SetLoop", &[Arg::Bool(enabled)])
            .await
            .map(drop)
    }

    /// Turn random order on or off (`/TrackList SetRandom`)
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn set_random(&self, enabled: bool) -> Result<(), MediaError> {
        self.call(ObjectPath::TrackList, "SetRandom", &[Arg::Bool(enabled)])
            .await
            .map(drop)
    }

    /// Append `uri` to the track list (`/TrackList AddTrack`)
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn add_track(&self, uri: &str, play_now: bool) -> Result<(), MediaError> {
        self.call(
            ObjectPath::TrackList,
            "AddTrack",
            &[Arg::Str(uri.to_string()), Arg::Bool(play_now)],
        )
        .await
        .map(drop)
    }

    /// Remove the track at 0-based `index` (`/TrackList DelTrack`)
    ///
    /// # Errors
    /// Returns error if the call fails
    pub async fn del_track(&self, index: i64) -> Result<(), MediaError> {
        self.call(ObjectPath::TrackList, "DelTrack", &[Arg::Int(index)])
            .await
            .map(drop)
    }

    async fn integer(&self, path: ObjectPath, method: &str) -> Result<i64, MediaError> {
        let reply = self.call(path, method, &[]).await?;
        reply
            .as_i64()
            .ok_or_else(|| unexpected(method, "integer", &reply))
    }

    async fn call(
        &self,
        path: ObjectPath,
        method: &str,
        args: &[Arg],
    ) -> Result<BusValue, MediaError> {
        let reply = self
            .bus
            .invoke(self.player.bus_name(), path, MPRIS_INTERFACE, method, args)
            .await?;

        Ok(reply)
    }
}

fn unexpected(method: &str, expected: &str, got: &BusValue) -> MediaError {
    MediaError::UnexpectedReply {
        method: method.to_string(),
        details: format!("expected {expected}, got {got:?}"),
    }
}
