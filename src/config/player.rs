use serde::{Deserialize, Serialize};

/// Player selection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Player to control when `--player` is not given on the command line.
    ///
    /// Either the short name (`audacious`) or the full bus name
    /// (`org.mpris.audacious`).
    pub name: Option<String>,
}
