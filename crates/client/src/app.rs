//! App resource access functions.
//!
//! Each method maps one logical operation onto one HTTP call. Transport
//! and backend failures are returned as they are; only the usage history
//! reshapes its result.

use chrono::{DateTime, Utc};
use plugindesk_core::AppId;
use plugindesk_model::{
    AppDetail, AppListItem, AppUpdateParams, ChatLogQuery, CreateAppParams, PagingData,
    ShareAppItem, ShareSearch, TotalUsageQuery, UsagePoint, non_empty_series,
};
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    /// List the apps owned by the current user.
    ///
    /// GET /app/myApps
    pub async fn list_my_apps(&self) -> ClientResult<Vec<AppListItem>> {
        self.send_data(self.get("/app/myApps")).await
    }

    /// Create an app and return its new id.
    ///
    /// POST /app/create
    pub async fn create_app(&self, params: &CreateAppParams) -> ClientResult<AppId> {
        let id: AppId = self.send_data(self.post("/app/create", params)).await?;
        tracing::info!(app_id = %id, name = %params.name, "created app");
        Ok(id)
    }

    /// Delete an app.
    ///
    /// DELETE /app/del?appId={id}
    pub async fn delete_app(&self, id: &AppId) -> ClientResult<()> {
        let req = self.delete("/app/del").query(&[("appId", id.as_str())]);
        self.send_unit(req).await?;
        tracing::info!(app_id = %id, "deleted app");
        Ok(())
    }

    /// Fetch one app.
    ///
    /// GET /app/detail?appId={id}
    pub async fn get_app(&self, id: &AppId) -> ClientResult<AppDetail> {
        let req = self.get("/app/detail").query(&[("appId", id.as_str())]);
        self.send_data(req).await
    }

    /// Update an app; only the fields set in `params` are sent.
    ///
    /// PUT /app/update?appId={id}
    pub async fn update_app(&self, id: &AppId, params: &AppUpdateParams) -> ClientResult<()> {
        let req = self
            .put("/app/update", params)
            .query(&[("appId", id.as_str())]);
        self.send_unit(req).await?;
        tracing::info!(app_id = %id, "updated app");
        Ok(())
    }

    /// Search the shared-app market.
    ///
    /// POST /app/share/getModels
    pub async fn list_shared_apps(
        &self,
        search: &ShareSearch,
    ) -> ClientResult<PagingData<ShareAppItem>> {
        self.send_data(self.post("/app/share/getModels", search))
            .await
    }

    /// Collect or un-collect a shared app; returns the new collection count.
    ///
    /// POST /app/share/collection?appId={id}
    pub async fn toggle_app_collection(&self, id: &AppId) -> ClientResult<u64> {
        let req = self
            .post_empty("/app/share/collection")
            .query(&[("appId", id.as_str())]);
        self.send_data(req).await
    }

    /// Usage of an app over the trailing 14-day window ending tomorrow.
    ///
    /// The result always has at least one point.
    ///
    /// POST /app/data/totalUsage
    pub async fn get_app_total_usage(&self, id: &AppId) -> ClientResult<Vec<UsagePoint>> {
        self.get_app_total_usage_at(id, Utc::now()).await
    }

    /// [`get_app_total_usage`](Self::get_app_total_usage) with an explicit "now".
    pub async fn get_app_total_usage_at(
        &self,
        id: &AppId,
        now: DateTime<Utc>,
    ) -> ClientResult<Vec<UsagePoint>> {
        let query = TotalUsageQuery::trailing(id.clone(), now);
        let points: Option<Vec<UsagePoint>> = self
            .send_optional(self.post("/app/data/totalUsage", &query))
            .await?;
        Ok(non_empty_series(points.unwrap_or_default(), now))
    }

    /// Chat logs of an app, returned exactly as the backend sent them.
    ///
    /// POST /app/getChatLogs
    pub async fn get_app_chat_logs(&self, query: &ChatLogQuery) -> ClientResult<Value> {
        self.send_raw(self.post("/app/getChatLogs", query)).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use chrono::TimeZone;
    use mockito::Matcher;
    use plugindesk_model::RequestPaging;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> ApiClient {
        ApiClient::new(&ClientConfig::new(server.url())).unwrap()
    }

    fn ok(data: Value) -> String {
        json!({"code": 200, "statusText": "", "message": "", "data": data}).to_string()
    }

    #[tokio::test]
    async fn test_list_my_apps() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/app/myApps")
            .with_body(ok(json!([
                {"_id": "a1", "name": "First", "avatar": "", "intro": "", "isOwner": true},
                {"_id": "a2", "name": "Second", "avatar": "", "intro": "", "isOwner": false}
            ])))
            .create_async()
            .await;

        let apps = client_for(&server).list_my_apps().await.unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].name, "First");
        assert_eq!(apps[1].id, AppId::from("a2"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_app_posts_params() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/app/create")
            .match_body(Matcher::Json(json!({
                "avatar": "/icon/logo.svg", "name": "Helper", "intro": ""
            })))
            .with_body(ok(json!("a9")))
            .create_async()
            .await;

        let id = client_for(&server)
            .create_app(&CreateAppParams::named("Helper"))
            .await
            .unwrap();
        assert_eq!(id, AppId::from("a9"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_and_detail_use_app_id_query() {
        let mut server = mockito::Server::new_async().await;
        let del = server
            .mock("DELETE", "/app/del")
            .match_query(Matcher::UrlEncoded("appId".into(), "a1".into()))
            .with_body(ok(Value::Null))
            .create_async()
            .await;
        let detail = server
            .mock("GET", "/app/detail")
            .match_query(Matcher::UrlEncoded("appId".into(), "a1".into()))
            .with_body(ok(json!({"_id": "a1", "name": "First", "type": "simple"})))
            .create_async()
            .await;

        let client = client_for(&server);
        client.delete_app(&AppId::from("a1")).await.unwrap();
        let app = client.get_app(&AppId::from("a1")).await.unwrap();
        assert_eq!(app.app_type.as_deref(), Some("simple"));

        del.assert_async().await;
        detail.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_app_sends_only_set_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/app/update")
            .match_query(Matcher::UrlEncoded("appId".into(), "a1".into()))
            .match_body(Matcher::Json(json!({"intro": "new intro"})))
            .with_body(ok(Value::Null))
            .create_async()
            .await;

        let params = AppUpdateParams {
            intro: Some("new intro".to_string()),
            ..Default::default()
        };
        client_for(&server)
            .update_app(&AppId::from("a1"), &params)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_shared_apps() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/app/share/getModels")
            .match_body(Matcher::Json(
                json!({"searchText": "bot", "pageNum": 1, "pageSize": 20}),
            ))
            .with_body(ok(json!({
                "pageNum": 1, "pageSize": 20, "total": 1,
                "data": [{"_id": "s1", "name": "Shared Bot", "isCollection": true,
                          "share": {"collection": 4}}]
            })))
            .create_async()
            .await;

        let page = client_for(&server)
            .list_shared_apps(&ShareSearch::new(
                Some("bot".to_string()),
                RequestPaging::default(),
            ))
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert!(page.data[0].is_collection);
        assert_eq!(page.data[0].share.collection, 4);
    }

    #[tokio::test]
    async fn test_toggle_collection_returns_count() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/app/share/collection")
            .match_query(Matcher::UrlEncoded("appId".into(), "s1".into()))
            .with_body(ok(json!(5)))
            .create_async()
            .await;

        let count = client_for(&server)
            .toggle_app_collection(&AppId::from("s1"))
            .await
            .unwrap();
        assert_eq!(count, 5);
    }

    #[tokio::test]
    async fn test_usage_sends_trailing_window() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/app/data/totalUsage")
            .match_body(Matcher::Json(json!({
                "appId": "a1",
                "start": "2026-10-06T12:00:00Z",
                "end": "2026-10-20T12:00:00Z"
            })))
            .with_body(ok(json!([{"date": "2026-10-18", "total": 12}])))
            .create_async()
            .await;

        let usage = client_for(&server)
            .get_app_total_usage_at(&AppId::from("a1"), now)
            .await
            .unwrap();
        assert_eq!(
            usage,
            vec![UsagePoint {
                date: "2026-10-18".to_string(),
                total: 12.0
            }]
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_usage_becomes_single_zero_point() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/app/data/totalUsage")
            .with_body(ok(json!([])))
            .create_async()
            .await;

        let usage = client_for(&server)
            .get_app_total_usage_at(&AppId::from("a1"), now)
            .await
            .unwrap();
        assert_eq!(usage.len(), 1);
        assert_eq!(usage[0].total, 0.0);
        assert_eq!(usage[0].date, "2026-10-19T12:00:00.000Z");
    }

    #[tokio::test]
    async fn test_null_or_missing_usage_becomes_single_zero_point() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        for body in [
            json!({"code": 200, "statusText": "", "data": null}),
            json!({"code": 200, "statusText": ""}),
        ] {
            let mut server = mockito::Server::new_async().await;
            server
                .mock("POST", "/app/data/totalUsage")
                .with_body(body.to_string())
                .create_async()
                .await;

            let usage = client_for(&server)
                .get_app_total_usage_at(&AppId::from("a1"), now)
                .await
                .unwrap();
            assert_eq!(
                usage,
                vec![UsagePoint {
                    date: "2026-10-19T12:00:00.000Z".to_string(),
                    total: 0.0
                }]
            );
        }
    }

    #[tokio::test]
    async fn test_chat_logs_are_returned_raw() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let raw = json!({"pageNum": 1, "pageSize": 20, "total": 0, "data": [], "extra": "kept"});
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/app/getChatLogs")
            .match_body(Matcher::PartialJson(json!({"appId": "a1", "pageNum": 1})))
            .with_body(ok(raw.clone()))
            .create_async()
            .await;

        let query =
            ChatLogQuery::last_days(AppId::from("a1"), 7, now, RequestPaging::default()).unwrap();
        let logs = client_for(&server).get_app_chat_logs(&query).await.unwrap();
        assert_eq!(logs, raw);
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/app/myApps")
            .with_status(401)
            .with_body(json!({"code": 401, "statusText": "unAuthorization", "message": ""}).to_string())
            .create_async()
            .await;

        let err = client_for(&server).list_my_apps().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.message().as_deref(), Some("unAuthorization"));
    }
}
