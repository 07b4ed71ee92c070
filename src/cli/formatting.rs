//! Formatting utilities for CLI output.
//!
//! Help text and errors are styled with ANSI escapes; command output is
//! printed plain so it stays easy to script against.

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats usage notes with styling
pub fn format_usage(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a list of bus names for a diagnostic message
///
/// # Examples
///
/// ```
/// use mpris_remote::cli::formatting::format_player_list;
///
/// assert_eq!(format_player_list(&[]), "  (none)\n");
/// assert_eq!(
///     format_player_list(&["org.mpris.foo".to_string()]),
///     "  org.mpris.foo\n"
/// );
/// ```
pub fn format_player_list(players: &[String]) -> String {
    if players.is_empty() {
        return "  (none)\n".to_string();
    }

    players.iter().map(|player| format!("  {player}\n")).collect()
}
