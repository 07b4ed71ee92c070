//! Session bus access for the MPRIS (version 1) player protocol.
//!
//! Everything above this module talks to players through [`BusClient`],
//! so the transport can be swapped for a recording fake in tests.

mod dbus;
mod error;
mod value;

pub use dbus::DbusClient;
pub use error::BusError;
pub use value::{Arg, BusValue};

use std::fmt;

use async_trait::async_trait;

/// Prefix shared by every MPRIS player service name.
pub const SERVICE_PREFIX: &str = "org.mpris.";

/// Prefix of MPRIS version 2 service names, which speak a different protocol.
pub const MPRIS2_SERVICE_PREFIX: &str = "org.mpris.MediaPlayer2.";

/// Interface implemented by all three player objects.
pub const MPRIS_INTERFACE: &str = "org.freedesktop.MediaPlayer";

/// The fixed object paths a player exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectPath {
    /// `/` - player identity and lifetime.
    Root,
    /// `/Player` - transport control and playback state.
    Player,
    /// `/TrackList` - the play queue.
    TrackList,
}

impl ObjectPath {
    /// The path as it appears on the bus.
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectPath::Root => "/",
            ObjectPath::Player => "/Player",
            ObjectPath::TrackList => "/TrackList",
        }
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability to talk to the session bus.
///
/// Implementations must perform exactly the calls they are asked for, in
/// order: the rest of the crate relies on call sequences being
/// reproducible.
#[async_trait]
pub trait BusClient: Send + Sync {
    /// Lists every name currently registered on the bus.
    ///
    /// # Errors
    /// Returns `BusError` if the bus daemon cannot be queried.
    async fn list_names(&self) -> Result<Vec<String>, BusError>;

    /// Invokes `method` on `path` of `service` within `interface`.
    ///
    /// # Errors
    /// Returns `BusError` if the call fails or the reply cannot be decoded.
    async fn invoke(
        &self,
        service: &str,
        path: ObjectPath,
        interface: &str,
        method: &str,
        args: &[Arg],
    ) -> Result<BusValue, BusError>;
}
