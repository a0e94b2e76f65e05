//! # Plugin Desk Model
//!
//! Request and response types exchanged with the platform backend.
//!
//! ## Core Concepts
//!
//! - **PluginForm**: the editable snapshot behind the plugin dialog
//! - **App records**: list items, details and share-market entries
//! - **Paging**: `RequestPaging` in, `PagingData<T>` out
//! - **Usage**: trailing usage window and the never-empty series rule
//!

// Module declarations
pub mod app;
pub mod paging;
pub mod plugin;
pub mod usage;

// Re-export commonly used types at crate root
pub use app::{
    AppDetail, AppListItem, AppShare, AppShareUpdate, AppUpdateParams, CreateAppParams,
    ShareAppItem,
};
pub use paging::{DEFAULT_PAGE_SIZE, PagingData, RequestPaging, ShareSearch};
pub use plugin::{
    CreatePluginParams, DEFAULT_NAME_REQUIRED, PluginDetail, PluginForm, PluginListItem,
    UpdatePluginParams,
};
pub use usage::{ChatLogQuery, TotalUsageQuery, UsagePoint, non_empty_series};

// Re-export core types that are commonly used with the model
pub use plugindesk_core::{AppId, DeskError, DeskResult, PluginId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
