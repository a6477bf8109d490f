//! ReportForge - markdown report formatting for multi-agent SRE investigations
//!
//! ReportForge turns the free-text findings of several independent
//! investigation agents into one deterministically structured markdown
//! report, topped with an LLM-generated executive summary. The summary is
//! best-effort: when the LLM call fails for any reason, a fixed fallback
//! summary is substituted and the report still renders.
//!
//! # Core Concepts
//!
//! - **Deterministic Assembly**: Identical inputs (with a deterministic LLM
//!   client) produce byte-identical reports
//! - **Graceful Degradation**: LLM failures never surface to the caller;
//!   the summary section degrades to a static template
//! - **Stateless Rendering**: A formatter holds only configuration, so one
//!   instance can serve concurrent render calls
//!
//! # Modules
//!
//! - [`report`] - Report formatter: investigation responses, plan approvals
//! - [`llm`] - LLM client trait and Bedrock/Anthropic implementations
//! - [`prompts`] - Prompt template loading and rendering
//! - [`domain`] - Investigation plans, agent results, metadata
//! - [`config`] - Provider configuration and resolution

pub mod config;
pub mod domain;
pub mod llm;
pub mod prompts;
pub mod report;

// Re-export commonly used types
pub use config::{Config, DEFAULT_PROVIDER, LlmConfig, LlmOverrides, resolve_provider};
pub use domain::{AgentResults, InvestigationMetadata, InvestigationPlan, NO_RESPONSE, UserPreferences};
pub use llm::{
    AnthropicClient, BedrockClient, CompletionRequest, CompletionResponse, LlmClient, LlmError, Message, Role,
    create_client,
};
pub use prompts::PromptLoader;
pub use report::{FALLBACK_SUMMARY, ReportFormatter, create_formatter, extract_steps};
