//! Amazon Bedrock runtime client implementation
//!
//! Invokes Claude models through the Bedrock runtime `invoke` endpoint
//! with bearer-token (API key) authentication, so no request signing is
//! needed. Request and response bodies use the Anthropic Messages schema
//! with the Bedrock version tag; the model travels in the URL.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::anthropic::{MessagesResponse, parse_response};
use super::{CompletionRequest, CompletionResponse, LlmClient, LlmError};
use crate::config::LlmConfig;

/// Version tag Bedrock requires in Anthropic-schema request bodies
const BEDROCK_ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Amazon Bedrock runtime client
pub struct BedrockClient {
    model: String,
    bearer_token: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
}

impl BedrockClient {
    /// Create a new client from configuration
    ///
    /// Reads the bearer token from the environment variable named in the
    /// config (`AWS_BEARER_TOKEN_BEDROCK` by default).
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(provider = %config.provider, model = %config.model, region = ?config.region, "from_config: called");
        let bearer_token = config.api_key()?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            bearer_token,
            base_url: config.base_url.clone(),
            http,
            max_tokens: config.max_tokens,
        })
    }

    /// URL of the invoke endpoint for this client's model
    fn invoke_url(&self) -> String {
        format!("{}/model/{}/invoke", self.base_url, self.model)
    }

    /// Build the request body for the Bedrock invoke endpoint
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        debug!(%self.model, %request.max_tokens, "build_request_body: called");
        serde_json::json!({
            "anthropic_version": BEDROCK_ANTHROPIC_VERSION,
            "max_tokens": request.max_tokens.min(self.max_tokens),
            "temperature": request.temperature,
            "system": request.system_prompt,
            "messages": request.messages,
        })
    }
}

#[async_trait]
impl LlmClient for BedrockClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        debug!(%self.model, %request.max_tokens, "complete: called");
        let body = self.build_request_body(&request);

        let response = self
            .http
            .post(self.invoke_url())
            .header("authorization", format!("Bearer {}", self.bearer_token))
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            debug!(%status, "complete: API error");
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError { status, message });
        }

        debug!("complete: success");
        let api_response: MessagesResponse = response.json().await?;
        Ok(parse_response(api_response))
    }
}
