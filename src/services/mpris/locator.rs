use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::services::bus::{BusClient, MPRIS2_SERVICE_PREFIX, SERVICE_PREFIX};

use super::{MediaError, PlayerHandle};

/// Resolves a requested player name against the players on the bus
///
/// The list of running players seen by the last lookup stays available
/// through [`running_players`](Self::running_players), including after a
/// failed lookup, so callers can tell the user what they could have picked.
pub struct PlayerLocator {
    bus: Arc<dyn BusClient>,
    running: Vec<String>,
}

impl PlayerLocator {
    /// Create a locator over the given bus
    pub fn new(bus: Arc<dyn BusClient>) -> Self {
        Self {
            bus,
            running: Vec::new(),
        }
    }

    /// Find the player to control
    ///
    /// `requested` may be a short name (`foo`) or a full bus name
    /// (`org.mpris.foo`). Without a request the sole running player is
    /// chosen. Issues exactly one `list_names` call and nothing else.
    ///
    /// # Errors
    /// - `MediaError::NoPlayersRunning` if no player is registered
    /// - `MediaError::RequestedPlayerNotRunning` if `requested` matches none
    /// - `MediaError::AmbiguousPlayerSelection` if no name was given and
    ///   several players are running
    /// - `MediaError::Bus` if the bus cannot be queried
    #[instrument(skip(self))]
    pub async fn find_player(&mut self, requested: Option<&str>) -> Result<PlayerHandle, MediaError> {
        self.running.clear();

        let names = self.bus.list_names().await?;
        self.running = names.into_iter().filter(|name| is_player_name(name)).collect();
        debug!(running = ?self.running, "Discovered running players");

        if self.running.is_empty() {
            return Err(MediaError::NoPlayersRunning);
        }

        let bus_name = match requested {
            Some(requested) => self
                .running
                .iter()
                .find(|name| matches_request(name, requested))
                .ok_or_else(|| MediaError::RequestedPlayerNotRunning {
                    requested: requested.to_string(),
                    running: self.running.clone(),
                })?,
            None => match self.running.as_slice() {
                [only] => only,
                _ => {
                    return Err(MediaError::AmbiguousPlayerSelection {
                        running: self.running.clone(),
                    });
                }
            },
        };

        info!(player = %bus_name, "Selected player");
        Ok(PlayerHandle::from_bus_name(bus_name))
    }

    /// Bus names of the players seen by the last lookup
    pub fn running_players(&self) -> &[String] {
        &self.running
    }
}

fn is_player_name(name: &str) -> bool {
    name.starts_with(SERVICE_PREFIX) && !name.starts_with(MPRIS2_SERVICE_PREFIX)
}

fn matches_request(bus_name: &str, requested: &str) -> bool {
    bus_name == requested || bus_name.strip_prefix(SERVICE_PREFIX) == Some(requested)
}
