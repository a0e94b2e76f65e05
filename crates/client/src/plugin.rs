//! Plugin resource access functions and the [`PluginApi`] seam.

use async_trait::async_trait;
use plugindesk_core::PluginId;
use plugindesk_model::{CreatePluginParams, PluginDetail, PluginListItem, UpdatePluginParams};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Backend operations the plugin dialog depends on.
///
/// [`ApiClient`] is the production implementation; dialog tests supply
/// recording fakes.
#[async_trait]
pub trait PluginApi: Send + Sync {
    /// Create a plugin and return its new id.
    async fn create_plugin(&self, params: CreatePluginParams) -> ClientResult<PluginId>;

    /// Apply changes to an existing plugin.
    async fn update_plugin(&self, params: UpdatePluginParams) -> ClientResult<()>;

    /// Delete a plugin.
    async fn delete_plugin(&self, id: PluginId) -> ClientResult<()>;
}

impl ApiClient {
    /// List the current user's plugins.
    ///
    /// GET /core/plugin/list
    pub async fn list_plugins(&self) -> ClientResult<Vec<PluginListItem>> {
        self.send_data(self.get("/core/plugin/list")).await
    }

    /// Fetch one plugin.
    ///
    /// GET /core/plugin/detail?id={id}
    pub async fn get_plugin(&self, id: &PluginId) -> ClientResult<PluginDetail> {
        let req = self.get("/core/plugin/detail").query(&[("id", id.as_str())]);
        self.send_data(req).await
    }
}

#[async_trait]
impl PluginApi for ApiClient {
    /// POST /core/plugin/create
    async fn create_plugin(&self, params: CreatePluginParams) -> ClientResult<PluginId> {
        let id: PluginId = self
            .send_data(self.post("/core/plugin/create", &params))
            .await?;
        tracing::info!(plugin_id = %id, name = %params.name, "created plugin");
        Ok(id)
    }

    /// PUT /core/plugin/update
    async fn update_plugin(&self, params: UpdatePluginParams) -> ClientResult<()> {
        self.send_unit(self.put("/core/plugin/update", &params))
            .await?;
        tracing::info!(plugin_id = %params.id, "updated plugin");
        Ok(())
    }

    /// DELETE /core/plugin/delete?id={id}
    async fn delete_plugin(&self, id: PluginId) -> ClientResult<()> {
        let req = self
            .delete("/core/plugin/delete")
            .query(&[("id", id.as_str())]);
        self.send_unit(req).await?;
        tracing::info!(plugin_id = %id, "deleted plugin");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
