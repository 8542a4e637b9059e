//! Gemini gateway
//!
//! Holds the HTTP client and credential and hands out one
//! [`GeminiSession`] per query.

use super::session::{GeminiSession, transport_error};
use super::types::{ListModelsResponse, api_error};
use crate::credentials::ApiKey;
use async_trait::async_trait;
use std::time::Duration;
use toonbench_application::{GatewayError, LlmGateway, LlmSession};
use toonbench_domain::Model;
use tracing::{debug, info};

/// Page size for the model listing
const LIST_PAGE_SIZE: u32 = 100;

pub struct GeminiLlmGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
    timeout: Duration,
}

impl GeminiLlmGateway {
    /// Create a gateway with an explicit per-request timeout.
    pub fn new(
        base_url: impl Into<String>,
        api_key: ApiKey,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(30)))
            .user_agent(concat!("toonbench/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Other(format!("failed to build HTTP client: {e}")))?;

        let base_url = base_url.into();
        info!(base_url = %base_url, timeout_secs = timeout.as_secs(), "Gemini gateway ready");

        Ok(Self {
            client,
            base_url,
            api_key,
            timeout,
        })
    }

    fn models_url(&self) -> String {
        format!("{}/v1beta/models", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        if model.is_blank() {
            return Err(GatewayError::ModelNotAvailable(
                "empty model name".to_string(),
            ));
        }
        Ok(Box::new(GeminiSession::new(
            self.client.clone(),
            &self.base_url,
            self.api_key.expose().to_string(),
            model.clone(),
            self.timeout,
        )))
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(self.models_url())
                .header("x-goog-api-key", self.api_key.expose())
                .query(&[("pageSize", LIST_PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let response = request
                .send()
                .await
                .map_err(|e| transport_error(e, self.timeout))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(api_error(status, &body, "models"));
            }

            let page: ListModelsResponse = response.json().await.map_err(|e| {
                GatewayError::RequestFailed(format!("invalid model listing: {e}"))
            })?;

            models.extend(
                page.models
                    .iter()
                    .filter(|m| m.supports_generate_content())
                    .map(|m| m.name.parse::<Model>().unwrap_or_else(|never| match never {})),
            );

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!("{} models support generateContent", models.len());
        Ok(models)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_server::{TestServer, json_response};
    use super::*;

    fn gateway(base_url: &str, timeout: Duration) -> GeminiLlmGateway {
        GeminiLlmGateway::new(base_url, ApiKey::new("test-key"), timeout).unwrap()
    }

    #[tokio::test]
    async fn test_send_posts_prompt_and_returns_text() {
        let server = TestServer::start(vec![json_response(
            200,
            r#"{"candidates":[{"content":{"parts":[{"text":"A"}]},"finishReason":"STOP"}]}"#,
        )])
        .await;

        let gateway = gateway(&server.base_url(), Duration::from_secs(5));
        let session = gateway.create_session(&Model::Gemini20Flash).await.unwrap();
        let text = session.send("list all names").await.unwrap();
        assert_eq!(text, "A");

        let requests = server.requests().await;
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert!(
            request.starts_with("POST /v1beta/models/gemini-2.0-flash:generateContent "),
            "unexpected request line: {request}"
        );
        assert!(request.to_lowercase().contains("x-goog-api-key: test-key"));
        assert!(request.contains(r#""text":"list all names""#));
    }

    #[tokio::test]
    async fn test_http_error_is_request_failure() {
        let server = TestServer::start(vec![json_response(
            429,
            r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#,
        )])
        .await;

        let gateway = gateway(&server.base_url(), Duration::from_secs(5));
        let session = gateway.create_session(&Model::Gemini20Flash).await.unwrap();
        let err = session.send("q").await.unwrap_err();
        assert!(err.to_string().contains("HTTP 429"));
        assert!(err.to_string().contains("RESOURCE_EXHAUSTED"));
    }

    #[tokio::test]
    async fn test_slow_server_hits_configured_timeout() {
        let server = TestServer::start_silent().await;

        let gateway = gateway(&server.base_url(), Duration::from_millis(200));
        let session = gateway.create_session(&Model::Gemini20Flash).await.unwrap();
        let err = session.send("q").await.unwrap_err();
        assert!(matches!(err, GatewayError::Timeout(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind and drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = gateway(&format!("http://{addr}"), Duration::from_secs(2));
        let session = gateway.create_session(&Model::Gemini20Flash).await.unwrap();
        let err = session.send("q").await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_available_models_follows_pages() {
        let server = TestServer::start(vec![
            json_response(
                200,
                r#"{"models":[{"name":"models/gemini-2.0-flash","supportedGenerationMethods":["generateContent"]}],"nextPageToken":"p2"}"#,
            ),
            json_response(
                200,
                r#"{"models":[{"name":"models/embedding-001","supportedGenerationMethods":["embedContent"]},{"name":"models/gemini-2.5-pro","supportedGenerationMethods":["generateContent"]}]}"#,
            ),
        ])
        .await;

        let gateway = gateway(&server.base_url(), Duration::from_secs(5));
        let models = gateway.available_models().await.unwrap();
        assert_eq!(models, vec![Model::Gemini20Flash, Model::Gemini25Pro]);

        let requests = server.requests().await;
        assert_eq!(requests.len(), 2);
        assert!(requests[1].contains("pageToken=p2"));
    }

    #[tokio::test]
    async fn test_blank_model_is_rejected_before_any_request() {
        let gateway = gateway("http://127.0.0.1:9", Duration::from_secs(1));
        let result = gateway.create_session(&Model::Custom(String::new())).await;
        assert!(matches!(result, Err(GatewayError::ModelNotAvailable(_))));
    }

    #[test]
    fn test_session_endpoint_trims_slash_and_prefix() {
        let session = GeminiSession::new(
            reqwest::Client::new(),
            "https://example.test/",
            "k".to_string(),
            "models/gemini-2.5-flash".parse().unwrap(),
            Duration::from_secs(1),
        );
        assert_eq!(
            session.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
