//! # Plugin Desk CLI
//!
//! Command-line interface for Plugin Desk.
//!
//! Manages plugins and apps on the backend without the desktop shell.
//!
//! ## Commands
//!
//! - `apps` - list, show, create, update, delete, browse shared apps,
//!   toggle collection, show usage and chat logs
//! - `plugins` - list, show, create, update and delete plugins
//!
//! Every command accepts `--json` to print the decoded payload instead
//! of the human-readable summary.
//!

pub mod cli;
pub mod commands;
pub mod output;

pub use cli::{AppsCommand, Cli, Command, PluginsCommand};
pub use commands::{resolve_config, run};

// Re-export dependencies for use in main.rs
pub use plugindesk_client;
pub use plugindesk_core;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "plugindesk_cli");
    }
}
