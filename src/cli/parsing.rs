//! Strict argument parsing shared by the commands.
//!
//! Numbers must be plain decimal digits: no sign, no whitespace, no radix
//! prefix, nothing trailing. Rust's own `parse` accepts a leading `+`,
//! so every number goes through an anchored pattern first.

use std::sync::LazyLock;

use regex::Regex;

use super::CliError;
use crate::services::{bus::BusError, mpris::MediaError};

#[allow(clippy::expect_used)]
static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[0-9]+\z").expect("decimal pattern is valid"));

/// Highest volume accepted by `volume`.
pub const MAX_VOLUME: u8 = 100;

/// Parse a non-negative decimal integer
///
/// # Errors
/// Returns `CliError::BadUserInput` unless `input` is only ASCII digits
/// and fits in an `i64`.
pub fn parse_unsigned(name: &str, input: &str) -> Result<i64, CliError> {
    check_decimal(name, input)?;

    input
        .parse::<i64>()
        .map_err(|_| CliError::BadUserInput(format!("{name} {input} is too large")))
}

/// Parse a `seek` target in milliseconds
///
/// Any decimal literal is a valid position. One too large to carry is
/// reported the way the transport reports any out-of-range argument.
///
/// # Errors
/// Returns `CliError::BadUserInput` unless `input` is only ASCII digits,
/// and `BusError::ArgumentOutOfRange` if it does not fit an `i64`.
pub fn parse_position(input: &str) -> Result<i64, CliError> {
    check_decimal("position", input)?;

    input.parse::<i64>().map_err(|_| {
        CliError::from(MediaError::from(BusError::ArgumentOutOfRange {
            method: "PositionSet".to_string(),
            value: input.to_string(),
            wire_type: "int32",
        }))
    })
}

fn check_decimal(name: &str, input: &str) -> Result<(), CliError> {
    if DECIMAL.is_match(input) {
        Ok(())
    } else {
        Err(CliError::BadUserInput(format!(
            "{name} must be a non-negative decimal integer, got {input:?}"
        )))
    }
}

/// Parse a volume percentage in `0..=100`
///
/// # Errors
/// Returns `CliError::BadUserInput` if `input` is not a strict integer or
/// is out of range.
pub fn parse_volume(input: &str) -> Result<u8, CliError> {
    let value = parse_unsigned("volume", input)?;

    u8::try_from(value)
        .ok()
        .filter(|volume| *volume <= MAX_VOLUME)
        .ok_or_else(|| {
            CliError::BadUserInput(format!(
                "volume must be between 0 and {MAX_VOLUME}, got {input}"
            ))
        })
}

/// Parse a literal `true` or `false`
///
/// # Errors
/// Returns `CliError::BadUserInput` for anything else.
pub fn parse_bool(name: &str, input: &str) -> Result<bool, CliError> {
    match input {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(CliError::BadUserInput(format!(
            "{name} must be 'true' or 'false', got {other:?}"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_accepts_plain_digits() {
        assert_eq!(parse_unsigned("n", "0").unwrap(), 0);
        assert_eq!(parse_unsigned("n", "007").unwrap(), 7);
        assert_eq!(parse_unsigned("n", "2123123123").unwrap(), 2_123_123_123);
    }

    #[test]
    fn unsigned_rejects_anything_else() {
        for input in ["", "-1", "+1", "0x0", "0xff", " 1", "1 ", "0\na", "1\n", "a", "1.5", "１"] {
            assert!(
                matches!(parse_unsigned("n", input), Err(CliError::BadUserInput(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn unsigned_rejects_overflow() {
        assert!(parse_unsigned("n", "99999999999999999999").is_err());
    }

    #[test]
    fn position_overflow_is_a_transport_error() {
        assert_eq!(parse_position("2123123123").unwrap(), 2_123_123_123);
        assert!(matches!(
            parse_position("99999999999999999999"),
            Err(CliError::Media(MediaError::Bus(BusError::ArgumentOutOfRange { .. })))
        ));
        assert!(matches!(parse_position("-1"), Err(CliError::BadUserInput(_))));
    }

    #[test]
    fn volume_bounds_are_inclusive() {
        assert_eq!(parse_volume("0").unwrap(), 0);
        assert_eq!(parse_volume("100").unwrap(), 100);
        assert!(parse_volume("101").is_err());
        assert!(parse_volume("22359871").is_err());
        assert!(parse_volume("99999999999999999999").is_err());
    }

    #[test]
    fn volume_rejects_non_decimal() {
        assert!(parse_volume("-1").is_err());
        assert!(parse_volume("0xff").is_err());
        assert!(parse_volume("loud").is_err());
    }

    #[test]
    fn bool_is_literal() {
        assert!(parse_bool("loop", "true").unwrap());
        assert!(!parse_bool("loop", "false").unwrap());
        assert!(parse_bool("loop", "TRUE").is_err());
        assert!(parse_bool("loop", "1").is_err());
        assert!(parse_bool("loop", "on").is_err());
    }
}
