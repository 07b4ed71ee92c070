use std::collections::BTreeMap;

use crate::services::bus::BusValue;

/// Metadata information for the current track
///
/// Players report whichever keys they know about; every accessor returns
/// `None` for a missing or mistyped key rather than failing. Note the two
/// duration keys use different units: `time` is in seconds while `length`
/// is in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    entries: BTreeMap<String, BusValue>,
}

impl TrackMetadata {
    /// Track artist
    pub fn artist(&self) -> Option<String> {
        self.text("artist")
    }

    /// Track title
    pub fn title(&self) -> Option<String> {
        self.text("title")
    }

    /// Album name
    pub fn album(&self) -> Option<String> {
        self.text("album")
    }

    /// Position of the track on its album, as the player reports it
    pub fn track_number(&self) -> Option<String> {
        self.text("tracknumber")
    }

    /// Track duration in seconds, from the `time` key
    pub fn time_secs(&self) -> Option<i64> {
        self.integer("time")
    }

    /// Track duration in milliseconds, from the `length` key
    pub fn length_millis(&self) -> Option<i64> {
        self.integer("length")
    }

    /// Raw value for any key
    pub fn get(&self, key: &str) -> Option<&BusValue> {
        self.entries.get(key)
    }

    /// All entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BusValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Whether the player reported no metadata at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn text(&self, key: &str) -> Option<String> {
        match self.entries.get(key)? {
            BusValue::Str(value) => Some(value.clone()),
            BusValue::Int(value) => Some(value.to_string()),
            _ => None,
        }
    }

    fn integer(&self, key: &str) -> Option<i64> {
        match self.entries.get(key)? {
            BusValue::Int(value) => Some(*value),
            BusValue::Str(value) => value.parse().ok(),
            _ => None,
        }
    }
}

impl From<BTreeMap<String, BusValue>> for TrackMetadata {
    fn from(entries: BTreeMap<String, BusValue>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>> FromIterator<(K, BusValue)> for TrackMetadata {
    fn from_iter<I: IntoIterator<Item = (K, BusValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        }
    }
}
