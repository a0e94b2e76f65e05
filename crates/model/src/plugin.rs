//! Plugin form and payload types
//!
//! `PluginForm` is the editable snapshot the plugin dialog works on. The
//! params types are what the plugin endpoints accept.

use plugindesk_core::{DEFAULT_AVATAR, DeskError, DeskResult, PluginId, Validatable};
use serde::{Deserialize, Serialize};

/// Message shown when the name field is left empty
pub const DEFAULT_NAME_REQUIRED: &str = "Name can't be empty";

// ============================================================================
// Form State
// ============================================================================

/// Editable snapshot of a plugin
///
/// `id` absent means the form creates a new plugin, `id` present means it
/// edits that plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PluginId>,
    pub avatar: String,
    pub name: String,
    #[serde(default)]
    pub intro: String,
}

impl Default for PluginForm {
    fn default() -> Self {
        Self {
            id: None,
            avatar: DEFAULT_AVATAR.to_string(),
            name: String::new(),
            intro: String::new(),
        }
    }
}

impl PluginForm {
    /// Blank form for creating a plugin
    pub fn new() -> Self {
        Self::default()
    }

    /// Form seeded from an existing plugin
    pub fn for_plugin(
        id: PluginId,
        avatar: impl Into<String>,
        name: impl Into<String>,
        intro: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            avatar: avatar.into(),
            name: name.into(),
            intro: intro.into(),
        }
    }

    /// Set the name (builder style)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the intro (builder style)
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    /// Whether this form edits an existing plugin
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Check the required name, reporting `message` when it is empty
    pub fn validate_with(&self, message: &str) -> DeskResult<()> {
        if self.name.trim().is_empty() {
            return Err(DeskError::field_validation("name", message));
        }
        Ok(())
    }

    /// Payload for the create endpoint
    pub fn to_create_params(&self) -> CreatePluginParams {
        CreatePluginParams {
            avatar: self.avatar.clone(),
            name: self.name.clone(),
            intro: self.intro.clone(),
        }
    }

    /// Payload for the update endpoint, or `None` when the form has no id
    pub fn to_update_params(&self) -> Option<UpdatePluginParams> {
        let id = self.id.clone()?;
        Some(UpdatePluginParams {
            id,
            avatar: Some(self.avatar.clone()),
            name: Some(self.name.clone()),
            intro: Some(self.intro.clone()),
        })
    }
}

impl Validatable for PluginForm {
    fn validate(&self) -> DeskResult<()> {
        self.validate_with(DEFAULT_NAME_REQUIRED)
    }
}

impl From<&PluginDetail> for PluginForm {
    fn from(detail: &PluginDetail) -> Self {
        Self::for_plugin(
            detail.id.clone(),
            detail.avatar.clone(),
            detail.name.clone(),
            detail.intro.clone(),
        )
    }
}

impl From<&PluginListItem> for PluginForm {
    fn from(item: &PluginListItem) -> Self {
        Self::for_plugin(
            item.id.clone(),
            item.avatar.clone(),
            item.name.clone(),
            item.intro.clone(),
        )
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// Body of `POST /core/plugin/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePluginParams {
    pub avatar: String,
    pub name: String,
    pub intro: String,
}

/// Body of `PUT /core/plugin/update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePluginParams {
    pub id: PluginId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
}

impl UpdatePluginParams {
    /// Update that changes nothing yet
    pub fn new(id: PluginId) -> Self {
        Self {
            id,
            avatar: None,
            name: None,
            intro: None,
        }
    }

    /// Whether any field would change
    pub fn has_changes(&self) -> bool {
        self.avatar.is_some() || self.name.is_some() || self.intro.is_some()
    }
}

// ============================================================================
// Records
// ============================================================================

/// Entry of `GET /core/plugin/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginListItem {
    #[serde(rename = "_id")]
    pub id: PluginId,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub intro: String,
}

/// Result of `GET /core/plugin/detail`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDetail {
    #[serde(rename = "_id")]
    pub id: PluginId,
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub update_time: Option<String>,
    #[serde(default)]
    pub modules: Vec<serde_json::Value>,
}

// ============================================================================
// Tests
// ============================================================================
