//! # Dialog Components
//!
//! Modal components for the Plugin Desk shell.
//!
//! - **PluginDialogView**: create, edit and delete a plugin
//! - **ConfirmPromptDialog**: confirmation before a destructive action
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plugindesk_ui::components::dialogs::PluginDialogView;
//!
//! fn MyComponent() -> Element {
//!     rsx! {
//!         PluginDialogView { form: PluginForm::new() }
//!     }
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod confirm_prompt;
pub mod plugin_dialog;

// ============================================================================
// Re-exports
// ============================================================================

pub use confirm_prompt::{ConfirmPromptDialog, ConfirmPromptDialogProps};
pub use plugin_dialog::{PluginDialogView, PluginDialogViewProps};
