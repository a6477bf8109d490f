//! ReportForge configuration types and provider resolution
//!
//! Resolves model, token budget, and credential settings per LLM provider.
//! Executive summary generation uses a reduced token budget, distinct from
//! the budget agent-facing completions get.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::llm::LlmError;

/// Environment variable consulted when no provider is given explicitly
pub const PROVIDER_ENV: &str = "LLM_PROVIDER";

/// Provider used when neither parameter nor environment specifies one
pub const DEFAULT_PROVIDER: &str = "bedrock";

/// Default Amazon Bedrock Claude model ID
pub const BEDROCK_MODEL_ID: &str = "us.anthropic.claude-3-7-sonnet-20250219-v1:0";

/// Default Anthropic Claude model ID
pub const ANTHROPIC_MODEL_ID: &str = "claude-sonnet-4-20250514";

/// Default AWS region for Bedrock
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default max tokens for full investigation completions
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Reduced max tokens for executive summary completions
pub const SUMMARY_MAX_TOKENS: u32 = 1000;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

/// Default HTTP request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 300_000;

/// Resolve the effective provider identifier
///
/// Precedence: explicit parameter, then the `LLM_PROVIDER` environment
/// variable, then `"bedrock"`.
pub fn resolve_provider(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var(PROVIDER_ENV).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string())
}

/// Resolved LLM configuration for one provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider name ("bedrock" or "anthropic")
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// AWS region (Bedrock only)
    pub region: Option<String>,

    /// Environment variable containing the API key / bearer token
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl LlmConfig {
    /// Build the default configuration for a provider
    pub fn for_provider(provider: &str) -> Result<Self, LlmError> {
        Self::for_provider_with(provider, &LlmOverrides::default())
    }

    /// Build a provider configuration with overrides applied
    pub fn for_provider_with(provider: &str, overrides: &LlmOverrides) -> Result<Self, LlmError> {
        let mut config = match provider {
            "bedrock" => {
                let region = overrides.region.clone().unwrap_or_else(|| DEFAULT_REGION.to_string());
                Self {
                    provider: provider.to_string(),
                    model: BEDROCK_MODEL_ID.to_string(),
                    base_url: format!("https://bedrock-runtime.{region}.amazonaws.com"),
                    region: Some(region),
                    api_key_env: "AWS_BEARER_TOKEN_BEDROCK".to_string(),
                    max_tokens: DEFAULT_MAX_TOKENS,
                    temperature: DEFAULT_TEMPERATURE,
                    timeout_ms: DEFAULT_TIMEOUT_MS,
                }
            }
            "anthropic" => Self {
                provider: provider.to_string(),
                model: ANTHROPIC_MODEL_ID.to_string(),
                region: None,
                api_key_env: "ANTHROPIC_API_KEY".to_string(),
                base_url: "https://api.anthropic.com".to_string(),
                max_tokens: DEFAULT_MAX_TOKENS,
                temperature: DEFAULT_TEMPERATURE,
                timeout_ms: DEFAULT_TIMEOUT_MS,
            },
            other => return Err(LlmError::UnsupportedProvider(other.to_string())),
        };

        config.apply(overrides);
        Ok(config)
    }

    /// Build the executive summary configuration for a provider
    ///
    /// Same as [`LlmConfig::for_provider`] with the token budget reduced to
    /// [`SUMMARY_MAX_TOKENS`]. An explicit `max_tokens` override still wins.
    pub fn formatter(provider: &str) -> Result<Self, LlmError> {
        Self::formatter_with(provider, &LlmOverrides::default())
    }

    /// Build the executive summary configuration with overrides applied
    pub fn formatter_with(provider: &str, overrides: &LlmOverrides) -> Result<Self, LlmError> {
        let mut config = Self::for_provider_with(provider, overrides)?;
        config.max_tokens = overrides.max_tokens.unwrap_or(SUMMARY_MAX_TOKENS);
        Ok(config)
    }

    fn apply(&mut self, overrides: &LlmOverrides) {
        if let Some(model) = &overrides.model {
            self.model = model.clone();
        }
        if let Some(base_url) = &overrides.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(max_tokens) = overrides.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(temperature) = overrides.temperature {
            self.temperature = temperature;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.timeout_ms = timeout_ms;
        }
    }

    /// Read the API key from the environment variable named in this config
    pub fn api_key(&self) -> Result<String, LlmError> {
        std::env::var(&self.api_key_env).map_err(|_| LlmError::MissingCredentials(self.api_key_env.clone()))
    }
}

/// Optional configuration overrides
///
/// Any field left as `None` keeps the provider default. This is the single
/// place override precedence is decided; individual call sites never reach
/// around it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmOverrides {
    /// Provider name override
    pub provider: Option<String>,

    /// Model identifier override
    pub model: Option<String>,

    /// AWS region override (Bedrock only)
    pub region: Option<String>,

    /// API base URL override
    #[serde(rename = "base-url")]
    pub base_url: Option<String>,

    /// Max tokens override
    #[serde(rename = "max-tokens")]
    pub max_tokens: Option<u32>,

    /// Temperature override
    pub temperature: Option<f32>,

    /// Request timeout override in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: Option<u64>,
}

/// Main ReportForge configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider overrides
    pub llm: LlmOverrides,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .reportforge.yml
        let local_config = PathBuf::from(".reportforge.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/reportforge/reportforge.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("reportforge").join("reportforge.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Effective provider for this configuration
    pub fn provider(&self) -> String {
        resolve_provider(self.llm.provider.as_deref())
    }
}
