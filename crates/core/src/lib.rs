//! # Plugin Desk Core
//!
//! Core types, traits, and error handling for Plugin Desk.
//!
//! This crate provides the foundational building blocks used throughout
//! the workspace, including:
//!
//! - **Types**: backend identifiers, toasts, routes, file-picker descriptors
//! - **Traits**: `Validatable`
//! - **Errors**: Unified error handling with `DeskError` and `DeskResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{DeskError, DeskResult};
pub use traits::Validatable;
pub use types::{
    AVATAR_EXTENSIONS, AVATAR_MAX_SIZE, AppId, DEFAULT_AVATAR, FileFilter, PickedFile, PluginId,
    Route, Toast, ToastStatus,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
