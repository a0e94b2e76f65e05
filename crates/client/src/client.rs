//! The `ApiClient` and its request helpers.
//!
//! Every backend response is wrapped in an envelope:
//!
//! ```json
//! { "code": 200, "statusText": "", "message": "", "data": ... }
//! ```
//!
//! A `code` of 200 yields `data`; anything else, or a non-2xx HTTP status,
//! becomes [`ClientError::Api`].

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Envelope code meaning success
const SUCCESS_CODE: u16 = 200;

// ============================================================================
// Response Envelope
// ============================================================================

/// The wrapper the backend puts around every payload.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<T> {
    code: u16,
    #[serde(default)]
    status_text: String,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

impl<T> Envelope<T> {
    /// Best human-readable text of a failed envelope
    fn error_text(&self) -> String {
        if !self.message.trim().is_empty() {
            self.message.clone()
        } else {
            self.status_text.clone()
        }
    }
}

// ============================================================================
// API Client
// ============================================================================

/// Type-safe HTTP client for the platform backend.
///
/// All methods return `Result<T, ClientError>` where `T` is the expected
/// response type. The per-resource methods live in [`crate::app`] and
/// [`crate::plugin`].
///
/// # Example
///
/// ```rust,ignore
/// let client = ApiClient::new(&ClientConfig::from_env()?)?;
/// let apps = client.list_my_apps().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying reqwest HTTP client.
    client: Client,
    /// Base URL of the backend API, without a trailing slash.
    base_url: String,
    /// Optional token for authenticated requests.
    token: Option<String>,
}

impl ApiClient {
    /// Create a client from a validated configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the authentication token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Clear the authentication token.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Build the full URL for an API endpoint path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    // ========================================================================
    // Request builders
    // ========================================================================

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.get(self.url(path)))
    }

    pub(crate) fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> RequestBuilder {
        self.authorize(self.client.post(self.url(path)).json(body))
    }

    /// POST without a request body.
    pub(crate) fn post_empty(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.post(self.url(path)))
    }

    pub(crate) fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> RequestBuilder {
        self.authorize(self.client.put(self.url(path)).json(body))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.delete(self.url(path)))
    }

    // ========================================================================
    // Response handling
    // ========================================================================

    /// Send a request and return its envelope `data`, which must be present.
    pub(crate) async fn send_data<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let envelope = self.send_envelope::<T>(req).await?;
        envelope
            .data
            .ok_or_else(|| ClientError::Parse("response envelope has no data".to_string()))
    }

    /// Send a request whose envelope `data` may be `null` or missing.
    pub(crate) async fn send_optional<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> ClientResult<Option<T>> {
        Ok(self.send_envelope::<T>(req).await?.data)
    }

    /// Send a request whose envelope `data` is ignored.
    pub(crate) async fn send_unit(&self, req: RequestBuilder) -> ClientResult<()> {
        self.send_envelope::<Value>(req).await?;
        Ok(())
    }

    /// Send a request and return `data` as raw JSON (`null` when absent).
    pub(crate) async fn send_raw(&self, req: RequestBuilder) -> ClientResult<Value> {
        let envelope = self.send_envelope::<Value>(req).await?;
        Ok(envelope.data.unwrap_or(Value::Null))
    }

    async fn send_envelope<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> ClientResult<Envelope<T>> {
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    /// Check the HTTP status and the envelope code, then decode.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<Envelope<T>> {
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.text().await?;

        if !status.is_success() {
            let status_code = status.as_u16();
            let message = serde_json::from_str::<Envelope<Value>>(&body)
                .map(|e| e.error_text())
                .unwrap_or_else(|_| format!("Server returned status {}", status_code));
            tracing::warn!(%url, status = status_code, %message, "request failed");
            return Err(ClientError::api(status_code, status_code, message));
        }

        // Probe the code first so a failed envelope with mismatched `data`
        // still reports the server's message.
        let probe: Envelope<Value> = serde_json::from_str(&body)
            .map_err(|e| ClientError::Parse(format!("{} ({})", e, url)))?;

        if probe.code != SUCCESS_CODE {
            let message = probe.error_text();
            tracing::warn!(%url, code = probe.code, %message, "backend reported an error");
            return Err(ClientError::api(status.as_u16(), probe.code, message));
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Parse(format!("{} ({})", e, url)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client_for(server: &mockito::ServerGuard) -> ApiClient {
        ApiClient::new(&ClientConfig::new(server.url()).with_token("t0k")).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = ApiClient::new(&ClientConfig::new("nope")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(&ClientConfig::new("http://localhost:3000/api/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert_eq!(client.url("/app/myApps"), "http://localhost:3000/api/app/myApps");
    }

    #[tokio::test]
    async fn test_envelope_data_is_unwrapped_and_token_sent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .match_header("authorization", "Bearer t0k")
            .with_body(r#"{"code":200,"statusText":"","data":"pong"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let data: String = client.send_data(client.get("/ping")).await.unwrap();
        assert_eq!(data, "pong");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_code_becomes_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ping")
            .with_body(r#"{"code":500,"statusText":"error","message":"no permission"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.send_unit(client.get("/ping")).await.unwrap_err();
        match err {
            ClientError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 200);
                assert_eq!(code, 500);
                assert_eq!(message, "no permission");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_error_without_envelope() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ping")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.send_unit(client.get("/ping")).await.unwrap_err();
        assert_eq!(
            err.message().as_deref(),
            Some("Server returned status 502")
        );
    }

    #[tokio::test]
    async fn test_missing_data_is_a_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ping")
            .with_body(r#"{"code":200}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .send_data::<String>(client.get("/ping"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));

        let raw = client.send_raw(client.get("/ping")).await.unwrap();
        assert_eq!(raw, Value::Null);
    }

    #[test]
    fn test_envelope_decodes_generic_data() {
        let full: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"code":200,"data":[1,2]}"#).unwrap();
        assert_eq!(full.data, Some(vec![1, 2]));

        let bare: Envelope<Vec<u32>> = serde_json::from_str(r#"{"code":200}"#).unwrap();
        assert_eq!(bare.data, None);
        assert_eq!(bare.status_text, "");

        let null: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"code":200,"data":null}"#).unwrap();
        assert_eq!(null.data, None);
    }

    #[tokio::test]
    async fn test_optional_data_accepts_null() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ping")
            .with_body(r#"{"code":200,"data":null}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let data = client
            .send_optional::<Vec<String>>(client.get("/ping"))
            .await
            .unwrap();
        assert_eq!(data, None);
    }
}
