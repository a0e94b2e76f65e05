//! # UI Components
//!
//! Reusable Dioxus components for the Plugin Desk shell.
//!
//! - **Inputs**: controlled text input and text area
//! - **Dialogs**: the plugin modal and its confirmation prompt
//! - **Toast**: transient notifications
//!
//! ## Component Hierarchy
//!
//! ```text
//! PluginDialogView
//! ├── TextInput (name)
//! ├── TextArea (intro)
//! └── ConfirmPromptDialog (delete confirmation)
//!
//! ToastStack
//! └── ToastItem (multiple)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dialogs;
pub mod inputs;
pub mod toast;

// ============================================================================
// Re-exports
// ============================================================================

pub use dialogs::{ConfirmPromptDialog, PluginDialogView};
pub use inputs::{TextArea, TextInput};
pub use toast::ToastStack;
