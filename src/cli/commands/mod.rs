/// Player control commands
pub mod media;

use super::CommandRegistry;

/// Registers every built-in command with the registry
pub fn register_commands(registry: &mut CommandRegistry) {
    media::register_commands(registry);
}
