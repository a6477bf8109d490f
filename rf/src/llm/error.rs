//! LLM error types

use thiserror::Error;

/// Errors that can occur during LLM operations
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing credentials: environment variable {0} is not set")]
    MissingCredentials(String),

    #[error("Unsupported LLM provider: '{0}'. Supported: bedrock, anthropic")]
    UnsupportedProvider(String),
}

impl LlmError {
    /// Check if this error came from the provider rejecting the request
    pub fn is_api_error(&self) -> bool {
        matches!(self, LlmError::ApiError { .. })
    }

    /// HTTP status, when the provider answered with one
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        let err = LlmError::ApiError {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert!(err.is_api_error());
        assert_eq!(err.status(), Some(403));

        let err = LlmError::MissingCredentials("ANTHROPIC_API_KEY".to_string());
        assert!(!err.is_api_error());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_display_names_env_var() {
        let err = LlmError::MissingCredentials("AWS_BEARER_TOKEN_BEDROCK".to_string());
        assert!(err.to_string().contains("AWS_BEARER_TOKEN_BEDROCK"));
    }

    #[test]
    fn test_display_unsupported_provider() {
        let err = LlmError::UnsupportedProvider("openai".to_string());
        let msg = err.to_string();
        assert!(msg.contains("openai"));
        assert!(msg.contains("bedrock"));
    }
}
