//! # Plugin Desk UI
//!
//! Dioxus Desktop UI for Plugin Desk.
//!
//! The crate has two halves:
//!
//! - [`dialog`]: the headless plugin create/edit/delete dialog. It knows
//!   nothing about Dioxus and is driven entirely through collaborator
//!   traits, so it can be tested with fakes.
//! - [`app`] and [`components`]: the desktop shell that renders the
//!   dialog, lists plugins and shows toasts.
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod avatar;
pub mod components;
pub mod dialog;
pub mod file_ops;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use plugindesk_client;
pub use plugindesk_core;
pub use plugindesk_model;

pub use app::App;
pub use avatar::{AvatarCompressor, compress_avatar};
pub use dialog::{
    AvatarOutcome, DeleteOutcome, DialogHost, DialogServices, DialogText, FilePicker,
    ImageCompressor, Navigator, Notifier, PluginDialog, SubmitOutcome,
};
pub use file_ops::NativeFilePicker;
pub use state::{DESK_STATE, DeskState, init_desk_state};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Plugin Desk";

/// Application display title
pub const TITLE: &str = "Plugin Desk - Plugin Manager";

/// CSS styles for the application
/// This is the compiled Tailwind CSS included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Plugin Desk desktop application
///
/// Builds the backend client from `config`, installs it in the global
/// state and starts the UI. Returns once the window is closed.
///
/// # Example
///
/// ```rust,ignore
/// fn main() -> anyhow::Result<()> {
///     plugindesk_ui::launch(ClientConfig::from_env()?)
/// }
/// ```
pub fn launch(config: plugindesk_client::ClientConfig) -> anyhow::Result<()> {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let api = plugindesk_client::ApiClient::new(&config)?;
    tracing::info!(base_url = %api.base_url(), "backend client ready");
    init_desk_state(api);

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 800.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(640.0, 480.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);

    Ok(())
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================
