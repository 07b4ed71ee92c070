/// Media player error types
pub mod error;
/// Player discovery
pub mod locator;
/// Track metadata types
pub mod metadata;
/// Remote-control session for one player
pub mod remote;
pub mod status;
/// Player identity and playback state types
pub mod types;

pub use error::*;
pub use locator::PlayerLocator;
pub use metadata::TrackMetadata;
pub use remote::Remote;
pub use status::{compact_status, verbose_status};
pub use types::*;
