/// Session bus capability and transport
pub mod bus;
/// MPRIS media player control service
pub mod mpris;
