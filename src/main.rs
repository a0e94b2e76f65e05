//! Plugin Desk
//!
//! Desktop manager for platform plugins.
//!
//! This is the main entry point for the Dioxus Desktop application.
//! The backend is configured through `PLUGINDESK_API_URL`,
//! `PLUGINDESK_TOKEN` and `PLUGINDESK_TIMEOUT_SECS`.

use anyhow::Context;
use plugindesk_client::ClientConfig;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    let config = ClientConfig::from_env().context("invalid backend configuration")?;
    tracing::info!(base_url = %config.base_url, "using backend");

    plugindesk_ui::launch(config)
}
