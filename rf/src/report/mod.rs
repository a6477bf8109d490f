//! Report formatting
//!
//! Renders multi-agent investigation output as structured markdown, plus
//! plan-approval documents for operator review. The formatter holds only
//! configuration; every render call is independent.

mod investigation;
mod plan_approval;
mod steps;
mod summary;

pub use steps::{extract_steps, has_ordinal_prefix, is_runbook_agent, is_step_line};
pub use summary::FALLBACK_SUMMARY;

use std::sync::Arc;

use tracing::info;

use crate::config::{Config, resolve_provider};
use crate::llm::LlmClient;
use crate::prompts::PromptLoader;

/// Markdown output formatter for multi-agent investigation responses
///
/// Holds the resolved provider identifier, the prompt loader, and an
/// optional injected LLM client. Nothing here mutates after construction,
/// so one formatter can serve concurrent render calls.
pub struct ReportFormatter {
    provider: String,
    prompts: PromptLoader,
    llm: Option<Arc<dyn LlmClient>>,
}

impl ReportFormatter {
    /// Create a formatter
    ///
    /// Provider precedence: explicit parameter, then the `LLM_PROVIDER`
    /// environment variable, then `"bedrock"`.
    pub fn new(llm_provider: Option<&str>) -> Self {
        let provider = resolve_provider(llm_provider);
        info!(%provider, "ReportFormatter initialized");
        Self {
            provider,
            prompts: PromptLoader::new("."),
            llm: None,
        }
    }

    /// Create a formatter from a loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(Some(&config.provider()))
    }

    /// Use the given client for summary generation instead of constructing
    /// one per call from the provider configuration
    pub fn with_client(mut self, client: Arc<dyn LlmClient>) -> Self {
        self.llm = Some(client);
        self
    }

    /// Use a specific prompt loader (e.g. rooted somewhere other than the
    /// working directory)
    pub fn with_prompt_loader(mut self, prompts: PromptLoader) -> Self {
        self.prompts = prompts;
        self
    }

    /// The resolved LLM provider identifier
    pub fn provider(&self) -> &str {
        &self.provider
    }
}

/// Create and return a new report formatter
pub fn create_formatter(llm_provider: Option<&str>) -> ReportFormatter {
    ReportFormatter::new(llm_provider)
}

/// Title-case a label: first letter of each whitespace-separated word
/// upper-cased, the rest lowered
pub(crate) fn title_case(label: &str) -> String {
    label
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
