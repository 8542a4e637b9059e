//! Gemini LLM session implementation
//!
//! `generateContent` is stateless and the session keeps no history, so each
//! `send` is an independent single-turn completion.

use super::types::{GenerateContentRequest, GenerateContentResponse, api_error};
use async_trait::async_trait;
use std::time::Duration;
use toonbench_application::{GatewayError, LlmSession};
use toonbench_domain::Model;
use tracing::debug;

pub struct GeminiSession {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: Model,
    timeout: Duration,
}

impl GeminiSession {
    pub(super) fn new(
        client: reqwest::Client,
        base_url: &str,
        api_key: String,
        model: Model,
        timeout: Duration,
    ) -> Self {
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model.api_id()
        );
        Self {
            client,
            endpoint,
            api_key,
            model,
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Classify a transport-level failure.
pub(super) fn transport_error(e: reqwest::Error, timeout: Duration) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout(timeout.as_secs())
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        debug!(
            model = %self.model,
            prompt_bytes = content.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&GenerateContentRequest::user_prompt(content))
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body, self.model.api_id()));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| match e.is_timeout() {
                true => GatewayError::Timeout(self.timeout.as_secs()),
                false => GatewayError::RequestFailed(format!("invalid response body: {e}")),
            })?;

        body.into_text()
    }
}
