//! App records and payloads
//!
//! Shapes of the `/app/*` endpoints. Backend ids arrive as `_id`; every
//! other key is camelCase.

use plugindesk_core::{AppId, DEFAULT_AVATAR};
use serde::{Deserialize, Serialize};

// ============================================================================
// Records
// ============================================================================

/// Entry of `GET /app/myApps`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppListItem {
    #[serde(rename = "_id")]
    pub id: AppId,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub permission: Option<String>,
}

/// Sharing state of an app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppShare {
    pub is_share: bool,
    pub is_share_detail: bool,
    /// How many users have collected the app
    pub collection: u64,
}

/// Result of `GET /app/detail`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDetail {
    #[serde(rename = "_id")]
    pub id: AppId,
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    #[serde(default, rename = "type")]
    pub app_type: Option<String>,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub update_time: Option<String>,
    #[serde(default)]
    pub modules: Vec<serde_json::Value>,
    #[serde(default)]
    pub share: AppShare,
}

/// Entry of the shared-app market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareAppItem {
    #[serde(rename = "_id")]
    pub id: AppId,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub share: AppShare,
    /// Whether the current user has collected this app
    #[serde(default)]
    pub is_collection: bool,
}

// ============================================================================
// Payloads
// ============================================================================

/// Body of `POST /app/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAppParams {
    pub avatar: String,
    pub name: String,
    pub intro: String,
}

impl CreateAppParams {
    /// Params with the placeholder avatar and an empty intro
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            avatar: DEFAULT_AVATAR.to_string(),
            name: name.into(),
            intro: String::new(),
        }
    }
}

/// Body of `PUT /app/update`
///
/// Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUpdateParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub app_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<AppShareUpdate>,
}

impl AppUpdateParams {
    /// Whether any field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.app_type.is_none()
            && self.avatar.is_none()
            && self.intro.is_none()
            && self.modules.is_none()
            && self.share.is_none()
    }
}

/// Sharing flags accepted by the update endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppShareUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_share: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_share_detail: Option<bool>,
}

// ============================================================================
// Tests
// ============================================================================
