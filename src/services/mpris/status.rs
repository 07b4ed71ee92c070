//! Human-readable playback status.
//!
//! Two views are offered: a compact flag listing and the verbose summary
//! shown when the remote is run without a command. Both fetch their data
//! live, in a fixed call order.

use std::fmt::Write;

use super::{MediaError, PlaybackStatus, Remote, TrackMetadata};

/// Render the mode flags, one `field: value` line each
///
/// # Errors
/// Returns error if `GetStatus` fails or its reply is malformed
pub async fn compact_status(remote: &Remote) -> Result<String, MediaError> {
    let status = remote.status().await?;
    Ok(render_compact(&status))
}

/// Render the full now-playing summary
///
/// Calls, in order: `GetLength`, `GetCurrentTrack`, `GetStatus`,
/// `PositionGet`, `GetMetadata`. With an empty track list only the first
/// call is made and the result is empty.
///
/// # Errors
/// Returns the first failing call's error
pub async fn verbose_status(remote: &Remote) -> Result<String, MediaError> {
    let track_count = remote.track_count().await?;
    if track_count == 0 {
        return Ok(String::new());
    }

    let current_track = remote.current_track().await?;
    let status = remote.status().await?;
    let position = remote.position_millis().await?;
    let metadata = remote.metadata().await?;

    Ok(render_verbose(&VerboseStatus {
        track_count,
        current_track,
        status,
        position_millis: position,
        metadata,
    }))
}

/// Snapshot backing the verbose view
#[derive(Debug, Clone)]
pub struct VerboseStatus {
    /// Tracks in the list
    pub track_count: i64,
    /// 0-based index of the current track
    pub current_track: i64,
    /// Playback state and flags
    pub status: PlaybackStatus,
    /// Elapsed time in the current track
    pub position_millis: i64,
    /// Current track metadata
    pub metadata: TrackMetadata,
}

/// Format the compact view of `status`
pub fn render_compact(status: &PlaybackStatus) -> String {
    format!(
        "playing: {}\nrandom/shuffle: {}\nrepeat track: {}\nrepeat list: {}\n",
        status.state.label(),
        status.shuffle,
        status.repeat_track,
        status.repeat_list,
    )
}

/// Format the verbose view of `snapshot`
pub fn render_verbose(snapshot: &VerboseStatus) -> String {
    let metadata = &snapshot.metadata;
    let mut output = String::new();

    let total = metadata
        .time_secs()
        .or_else(|| metadata.length_millis().map(|millis| millis / 1000))
        .map_or_else(|| "?:??".to_string(), format_minutes);

    let _ = write!(
        output,
        "[{} {}/{}] @ {}/{}",
        snapshot.status.state.label(),
        snapshot.current_track.saturating_add(1),
        snapshot.track_count,
        format_minutes(snapshot.position_millis / 1000),
        total,
    );
    if let Some(number) = metadata.track_number() {
        let _ = write!(output, " - #{number}");
    }
    output.push('\n');

    for (label, value) in [
        ("artist", metadata.artist()),
        ("title", metadata.title()),
        ("album", metadata.album()),
    ] {
        if let Some(value) = value {
            let _ = writeln!(output, "  {label}: {value}");
        }
    }

    let _ = writeln!(
        output,
        "[repeat {}] [random {}] [loop {}]",
        on_off(snapshot.status.repeat_track),
        on_off(snapshot.status.shuffle),
        on_off(snapshot.status.repeat_list),
    );

    output
}

/// Format whole seconds as `m:ss`
pub fn format_minutes(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
