//! Anthropic Claude API client implementation
//!
//! Non-streaming Messages API client. Each call makes a single attempt:
//! failures surface immediately so the caller's degradation path can run.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{CompletionRequest, CompletionResponse, LlmClient, LlmError, StopReason, TokenUsage};
use crate::config::LlmConfig;

/// Anthropic Claude API client
pub struct AnthropicClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
}

impl AnthropicClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in the config.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(provider = %config.provider, model = %config.model, "from_config: called");
        let api_key = config.api_key()?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_tokens: config.max_tokens,
        })
    }

    /// Build the request body for the Messages API
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        debug!(%self.model, %request.max_tokens, "build_request_body: called");
        serde_json::json!({
            "model": self.model,
            "max_tokens": request.max_tokens.min(self.max_tokens),
            "temperature": request.temperature,
            "system": request.system_prompt,
            "messages": request.messages,
        })
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        debug!(%self.model, %request.max_tokens, "complete: called");
        let url = format!("{}/v1/messages", self.base_url);
        let body = self.build_request_body(&request);

        let response = self
            .http
            .post(url)
            .header("x-api-key", self.api_key.clone())
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
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

// Messages API wire types. The Bedrock client parses the same schema, so
// these are shared within the llm module.

#[derive(Debug, Deserialize)]
pub(crate) struct MessagesResponse {
    pub(crate) content: Vec<ResponseContentBlock>,
    pub(crate) stop_reason: Option<String>,
    #[serde(default)]
    pub(crate) usage: ResponseUsage,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub(crate) enum ResponseContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    // Providers may emit non-text blocks (e.g. thinking) before the text
    #[serde(other)]
    Other,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResponseUsage {
    #[serde(default)]
    pub(crate) input_tokens: u64,
    #[serde(default)]
    pub(crate) output_tokens: u64,
}

/// Collect text blocks into a completion response
pub(crate) fn parse_response(api_response: MessagesResponse) -> CompletionResponse {
    let mut content: Option<String> = None;
    for block in api_response.content {
        if let ResponseContentBlock::Text { text } = block {
            match content {
                Some(ref mut acc) => acc.push_str(&text),
                None => content = Some(text),
            }
        }
    }

    CompletionResponse {
        content,
        stop_reason: StopReason::from_api(api_response.stop_reason.as_deref().unwrap_or("end_turn")),
        usage: TokenUsage {
            input_tokens: api_response.usage.input_tokens,
            output_tokens: api_response.usage.output_tokens,
        },
    }
}
