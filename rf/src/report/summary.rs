//! Executive summary generation
//!
//! One LLM call per investigation render. Failure of any kind is absorbed
//! here: the report must still render when the model is unreachable, so
//! every error path degrades to a fixed fallback summary.

use std::sync::Arc;

use eyre::{Result, eyre};
use tracing::{debug, error};

use super::ReportFormatter;
use crate::config::LlmConfig;
use crate::domain::AgentResults;
use crate::llm::{CompletionRequest, LlmClient, Message, create_client};

/// Fixed executive summary used when LLM generation fails
///
/// Other components render and compare against this text; it must stay
/// byte-for-byte stable.
pub const FALLBACK_SUMMARY: &str = r#"## 📋 Executive Summary

### 🎯 Key Insights
- **Root Cause**: Investigation findings require analysis
- **Impact**: Service performance may be affected
- **Severity**: Medium

### ⚡ Next Steps
1. **Immediate** (< 1 hour): Review detailed findings below
2. **Short-term** (< 24 hours): Execute recommended remediation steps
3. **Long-term** (< 1 week): Monitor system metrics for improvement
4. **Follow-up**: Schedule post-incident review if applicable"#;

impl ReportFormatter {
    /// Generate the executive summary for a set of agent results
    ///
    /// Returns an empty string when no agent responded at all (no LLM
    /// call is made), and the fixed fallback when generation fails for
    /// any reason.
    pub(crate) async fn generate_executive_summary(
        &self,
        query: &str,
        agent_results: &AgentResults,
        user_preferences: Option<&[serde_json::Value]>,
    ) -> String {
        if agent_results.is_empty() {
            debug!("generate_executive_summary: no agent results, skipping");
            return String::new();
        }

        match self.summarize(query, agent_results, user_preferences).await {
            Ok(summary) => summary,
            Err(e) => {
                error!(error = %e, "Error generating executive summary with LLM, using fallback");
                FALLBACK_SUMMARY.to_string()
            }
        }
    }

    async fn summarize(
        &self,
        query: &str,
        agent_results: &AgentResults,
        user_preferences: Option<&[serde_json::Value]>,
    ) -> Result<String> {
        let results_text = summary_context(agent_results, user_preferences)?;

        let (system_prompt, user_prompt) = self.prompts.executive_summary_prompts(query, &results_text)?;
        debug!(
            system_len = system_prompt.len(),
            user_len = user_prompt.len(),
            "summarize: prompts prepared"
        );

        let config = LlmConfig::formatter(self.provider())?;
        let client = self.summary_client(&config)?;
        debug!(provider = %config.provider, max_tokens = config.max_tokens, "summarize: invoking LLM");

        let request = CompletionRequest {
            system_prompt,
            messages: vec![Message::user(user_prompt)],
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        };

        let response = client.complete(request).await?;
        let content = response
            .content
            .ok_or_else(|| eyre!("completion response contained no text content"))?;

        Ok(content.trim().to_string())
    }

    /// The injected client if present, otherwise a fresh provider client
    fn summary_client(&self, config: &LlmConfig) -> Result<Arc<dyn LlmClient>> {
        match &self.llm {
            Some(client) => Ok(client.clone()),
            None => Ok(create_client(config)?),
        }
    }
}

/// Assemble the findings text handed to the LLM
///
/// Contributing agents become labeled blocks; user preferences, when
/// present, are appended verbatim as pretty-printed JSON.
fn summary_context(
    agent_results: &AgentResults,
    user_preferences: Option<&[serde_json::Value]>,
) -> Result<String> {
    let blocks: Vec<String> = agent_results
        .contributing()
        .map(|(agent, result)| format!("**{agent}:**\n{result}\n"))
        .collect();

    let mut results_text = blocks.join("\n");

    if let Some(prefs) = user_preferences
        && !prefs.is_empty()
    {
        let prefs_text = serde_json::to_string_pretty(prefs)?;
        results_text.push_str(&format!("\n\n**User Preferences:**\n{prefs_text}\n"));
    }

    Ok(results_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NO_RESPONSE;
    use crate::llm::client::mock::MockLlmClient;
    use crate::prompts::PromptLoader;
    use serde_json::json;

    fn formatter_with(client: MockLlmClient) -> (ReportFormatter, Arc<MockLlmClient>) {
        let client = Arc::new(client);
        let formatter = ReportFormatter::new(Some("bedrock"))
            .with_prompt_loader(PromptLoader::embedded_only())
            .with_client(client.clone());
        (formatter, client)
    }

    #[tokio::test]
    async fn test_empty_results_skip_llm() {
        let (formatter, client) = formatter_with(MockLlmClient::always("should not appear"));

        let summary = formatter
            .generate_executive_summary("query", &AgentResults::new(), None)
            .await;

        assert_eq!(summary, "");
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_summary_is_trimmed() {
        let (formatter, client) = formatter_with(MockLlmClient::always("  ## Summary\ncontent  \n"));
        let results = AgentResults::from([("metrics_agent", "CPU at 95%")]);

        let summary = formatter.generate_executive_summary("query", &results, None).await;

        assert_eq!(summary, "## Summary\ncontent");
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_llm_failure_yields_exact_fallback() {
        let (formatter, _) = formatter_with(MockLlmClient::failing("provider down"));
        let results = AgentResults::from([("metrics_agent", "CPU at 95%")]);

        let summary = formatter.generate_executive_summary("query", &results, None).await;

        assert_eq!(summary, FALLBACK_SUMMARY);
    }

    #[tokio::test]
    async fn test_unsupported_provider_yields_fallback() {
        // Injected client never reached: formatter config resolution fails first
        let client = Arc::new(MockLlmClient::always("unused"));
        let formatter = ReportFormatter::new(Some("no-such-provider"))
            .with_prompt_loader(PromptLoader::embedded_only())
            .with_client(client);
        let results = AgentResults::from([("metrics_agent", "CPU at 95%")]);

        let summary = formatter.generate_executive_summary("query", &results, None).await;

        assert_eq!(summary, FALLBACK_SUMMARY);
    }

    #[test]
    fn test_summary_context_labels_agents() {
        let results = AgentResults::from([
            ("metrics_agent", "CPU at 95%"),
            ("logs_agent", "OOM events"),
        ]);

        let text = summary_context(&results, None).unwrap();

        assert_eq!(text, "**metrics_agent:**\nCPU at 95%\n\n**logs_agent:**\nOOM events\n");
    }

    #[test]
    fn test_summary_context_skips_sentinel_and_empty() {
        let results = AgentResults::from([
            ("metrics_agent", "CPU at 95%"),
            ("logs_agent", NO_RESPONSE),
            ("k8s_agent", ""),
        ]);

        let text = summary_context(&results, None).unwrap();

        assert!(text.contains("metrics_agent"));
        assert!(!text.contains("logs_agent"));
        assert!(!text.contains("k8s_agent"));
    }

    #[test]
    fn test_summary_context_appends_preferences() {
        let results = AgentResults::from([("metrics_agent", "CPU at 95%")]);
        let prefs = vec![json!({"channel": "slack", "escalation": "page-oncall"})];

        let text = summary_context(&results, Some(&prefs)).unwrap();

        assert!(text.contains("**User Preferences:**"));
        assert!(text.contains("\"channel\": \"slack\""));
    }

    #[test]
    fn test_summary_context_ignores_empty_preferences() {
        let results = AgentResults::from([("metrics_agent", "CPU at 95%")]);
        let prefs: Vec<serde_json::Value> = vec![];

        let text = summary_context(&results, Some(&prefs)).unwrap();

        assert!(!text.contains("User Preferences"));
    }

    #[test]
    fn test_fallback_summary_exact_shape() {
        assert!(FALLBACK_SUMMARY.starts_with("## 📋 Executive Summary"));
        assert!(FALLBACK_SUMMARY.ends_with("Schedule post-incident review if applicable"));
        assert!(FALLBACK_SUMMARY.contains("- **Severity**: Medium"));
    }
}
