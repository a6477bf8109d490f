//! LLM client module
//!
//! Provides the completion client trait, the Bedrock and Anthropic
//! implementations, and a provider-string factory.

use std::sync::Arc;

use tracing::debug;

mod anthropic;
mod bedrock;
pub mod client;
mod error;
mod types;

pub use anthropic::AnthropicClient;
pub use bedrock::BedrockClient;
pub use client::LlmClient;
pub use error::LlmError;
pub use types::{CompletionRequest, CompletionResponse, Message, Role, StopReason, TokenUsage};

use crate::config::LlmConfig;

/// Create an LLM client for the provider named in the config
///
/// Supports "bedrock" and "anthropic" providers.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "bedrock" => {
            debug!("create_client: creating Bedrock client");
            Ok(Arc::new(BedrockClient::from_config(config)?))
        }
        "anthropic" => {
            debug!("create_client: creating Anthropic client");
            Ok(Arc::new(AnthropicClient::from_config(config)?))
        }
        other => {
            debug!(provider = %other, "create_client: unknown provider");
            Err(LlmError::UnsupportedProvider(other.to_string()))
        }
    }
}
