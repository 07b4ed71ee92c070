/// Errors raised by the bus transport.
///
/// These are passed through the rest of the crate untouched.
#[derive(thiserror::Error, Debug)]
pub enum BusError {
    /// D-Bus communication error
    #[error("D-Bus operation failed: {0}")]
    DbusError(#[from] zbus::Error),

    /// Standard D-Bus interface error
    #[error("D-Bus request failed: {0}")]
    FdoError(#[from] zbus::fdo::Error),

    /// An argument cannot be represented in the wire type the protocol uses
    #[error("Argument {value} for {method} does not fit the protocol's {wire_type}")]
    ArgumentOutOfRange {
        /// Method being invoked
        method: String,
        /// Offending value, as given
        value: String,
        /// Wire type the value had to fit
        wire_type: &'static str,
    },

    /// The argument combination has no wire encoding
    #[error("Unsupported argument list for {method}: {signature}")]
    UnsupportedArguments {
        /// Method being invoked
        method: String,
        /// Rendered argument kinds
        signature: String,
    },

    /// The reply body could not be decoded
    #[error("Failed to decode reply to {method}: {details}")]
    DecodeFailed {
        /// Method whose reply was malformed
        method: String,
        /// Decoder error details
        details: String,
    },

    /// The remote method failed
    #[error("{method} failed: {details}")]
    MethodFailed {
        /// Method that failed
        method: String,
        /// Error reported by the remote side
        details: String,
    },
}
