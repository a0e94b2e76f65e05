//! # Plugin Desk Client
//!
//! Typed HTTP access to the platform backend.
//!
//! - [`ApiClient`]: reqwest-based client that unwraps the response envelope
//! - [`ClientConfig`]: base URL, token and timeout, from TOML or environment
//! - App functions: list, create, fetch, update, delete, share search,
//!   collection toggle, usage history, chat logs
//! - Plugin functions and the [`PluginApi`] trait the plugin dialog uses
//!
//! ## Example
//!
//! ```rust,ignore
//! use plugindesk_client::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(&ClientConfig::from_env()?)?;
//! for app in client.list_my_apps().await? {
//!     println!("{} {}", app.id, app.name);
//! }
//! ```

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod plugin;

pub use client::ApiClient;
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_API_URL, ENV_TIMEOUT_SECS, ENV_TOKEN,
};
pub use error::{ClientError, ClientResult};
pub use plugin::PluginApi;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
