//! Core types used throughout Plugin Desk
//!
//! Identifiers, notification values, navigation targets and file-selection
//! descriptors shared by the model, client and UI crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Constants
// ============================================================================

/// Avatar shown until the user picks an image
pub const DEFAULT_AVATAR: &str = "/icon/logo.svg";

/// Maximum avatar width and height after compression, in logical pixels
pub const AVATAR_MAX_SIZE: u32 = 100;

/// File extensions accepted by the avatar picker
pub const AVATAR_EXTENSIONS: &[&str] = &["jpg", "png", "svg"];

// ============================================================================
// Unique Identifiers
// ============================================================================

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a backend identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw identifier
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume into the raw identifier
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Backend identifier of a plugin
    PluginId
);

string_id!(
    /// Backend identifier of an app
    AppId
);

// ============================================================================
// Notifications
// ============================================================================

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastStatus {
    Success,
    Warning,
    Error,
}

impl ToastStatus {
    /// Icon shown next to the toast title
    pub fn icon(&self) -> &'static str {
        match self {
            ToastStatus::Success => "✓",
            ToastStatus::Warning => "⚠",
            ToastStatus::Error => "✕",
        }
    }
}

/// A transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Identifier used to dismiss this toast
    pub id: Uuid,
    pub title: String,
    pub status: ToastStatus,
}

impl Toast {
    /// Create a toast with the given status
    pub fn new(title: impl Into<String>, status: ToastStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            status,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, ToastStatus::Success)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(title, ToastStatus::Warning)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title, ToastStatus::Error)
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// Views the desktop shell can navigate to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// The list of the user's plugins
    #[default]
    PluginList,
    /// The editor view for one plugin
    PluginEdit(PluginId),
}

impl Route {
    /// Path form of the route, as the web front-end spells it
    pub fn path(&self) -> String {
        match self {
            Route::PluginList => "/plugin/list".to_string(),
            Route::PluginEdit(id) => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("pluginId", id.as_str())
                    .finish();
                format!("/plugin/edit?{}", query)
            }
        }
    }
}

// ============================================================================
// File Selection
// ============================================================================

/// What a file picker is allowed to return
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// Accepted extensions, without the leading dot
    pub extensions: Vec<String>,
    /// Whether more than one file may be selected
    pub multiple: bool,
}

impl FileFilter {
    /// Filter for the avatar picker: images only, single selection
    pub fn avatar() -> Self {
        Self {
            extensions: AVATAR_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            multiple: false,
        }
    }

    /// Check whether a file name carries one of the accepted extensions
    pub fn accepts(&self, file_name: &str) -> bool {
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return false;
        };
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// A file returned by a picker, already read into memory
#[derive(Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl PickedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Lower-cased extension of the file name, if any
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}

impl fmt::Debug for PickedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_id_serializes_transparently() {
        let id = PluginId::new("abc123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");

        let back: AppId = serde_json::from_str("\"app-1\"").unwrap();
        assert_eq!(back.as_str(), "app-1");
        assert_eq!(back.to_string(), "app-1");
    }

    #[test]
    fn test_route_path() {
        assert_eq!(Route::PluginList.path(), "/plugin/list");
        assert_eq!(
            Route::PluginEdit(PluginId::from("abc123")).path(),
            "/plugin/edit?pluginId=abc123"
        );
        assert_eq!(Route::default(), Route::PluginList);
    }

    #[test]
    fn test_route_path_encodes_id() {
        assert_eq!(
            Route::PluginEdit(PluginId::from("a b&c=d")).path(),
            "/plugin/edit?pluginId=a+b%26c%3Dd"
        );
    }

    #[test]
    fn test_avatar_filter() {
        let filter = FileFilter::avatar();
        assert!(!filter.multiple);
        assert!(filter.accepts("me.png"));
        assert!(filter.accepts("ME.JPG"));
        assert!(filter.accepts("logo.svg"));
        assert!(!filter.accepts("notes.txt"));
        assert!(!filter.accepts("noextension"));
    }

    #[test]
    fn test_toast_constructors() {
        let toast = Toast::warning("Select File Failed");
        assert_eq!(toast.status, ToastStatus::Warning);
        assert_eq!(toast.title, "Select File Failed");
        assert_ne!(Toast::success("a").id, Toast::success("a").id);
    }

    #[test]
    fn test_picked_file_extension_and_debug() {
        let file = PickedFile::new("Avatar.PNG", vec![1, 2, 3]);
        assert_eq!(file.extension().as_deref(), Some("png"));
        assert_eq!(format!("{:?}", file), "PickedFile { name: \"Avatar.PNG\", len: 3 }");
        assert_eq!(PickedFile::new("README", vec![]).extension(), None);
    }
}
