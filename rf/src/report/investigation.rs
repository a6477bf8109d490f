//! Investigation response rendering
//!
//! Assembles the complete markdown document: header, executive summary,
//! per-agent key findings, and either the remaining plan steps or a
//! completion notice. Section order is fixed; only presence varies.

use tracing::debug;

use super::steps::{extract_steps, has_ordinal_prefix, is_runbook_agent};
use super::{ReportFormatter, title_case};
use crate::domain::{AgentResults, InvestigationMetadata, InvestigationPlan};

/// Agent name as shown in section headings
fn display_name(agent_name: &str) -> String {
    title_case(&agent_name.replace('_', " "))
}

impl ReportFormatter {
    /// Format a complete investigation response in clean markdown
    ///
    /// The effective plan is the explicit `plan` if given, else the plan
    /// nested in `metadata`, else an empty plan (which routes straight to
    /// the completion notice).
    pub async fn format_investigation_response(
        &self,
        query: &str,
        agent_results: &AgentResults,
        metadata: &InvestigationMetadata,
        plan: Option<&InvestigationPlan>,
        user_preferences: Option<&[serde_json::Value]>,
    ) -> String {
        let fallback_plan = InvestigationPlan::default();
        let plan_info = plan.or(metadata.investigation_plan.as_ref()).unwrap_or(&fallback_plan);
        let current_step = metadata.current_step();
        let total_steps = plan_info.total_steps();
        debug!(
            %current_step,
            %total_steps,
            agents = agent_results.len(),
            "format_investigation_response: called"
        );

        let mut output: Vec<String> = Vec::new();

        // Header
        output.push("# 🔍 Investigation Results".to_string());
        output.push(String::new());
        output.push(format!("**Query:** {query}"));
        output.push(String::new());

        // Executive Summary Section
        let executive_summary = self
            .generate_executive_summary(query, agent_results, user_preferences)
            .await;
        if !executive_summary.is_empty() {
            output.push(executive_summary);
            output.push(String::new());
        }

        // Key Findings Section (omitted entirely when nothing contributed)
        if agent_results.has_contributions() {
            output.push("## 🎯 Key Findings".to_string());
            output.push(String::new());

            for (agent_name, result) in agent_results.iter() {
                if !AgentResults::has_content(result) {
                    continue;
                }

                output.push(format!("### {}", display_name(agent_name)));

                if is_runbook_agent(agent_name) {
                    let steps = extract_steps(result);
                    if !steps.is_empty() {
                        output.push(String::new());
                        output.push("**Runbook Steps Found:**".to_string());
                        for step in &steps {
                            if has_ordinal_prefix(step) {
                                output.push(step.clone());
                            } else {
                                output.push(format!("- {step}"));
                            }
                        }
                        output.push(String::new());
                    } else {
                        // No step lines detected, show the full response
                        output.push(format!("- {result}"));
                        output.push(String::new());
                    }
                } else {
                    output.push(format!("- {result}"));
                    output.push(String::new());
                }
            }
        }

        // Next Steps Section
        if current_step < total_steps {
            output.push("## 📋 Next Steps".to_string());
            output.push(String::new());
            for (offset, step) in plan_info.remaining_steps(current_step).iter().enumerate() {
                output.push(format!("{}. {}", current_step + 1 + offset, step));
            }
            output.push(String::new());
        }

        // Investigation Complete
        if current_step >= total_steps {
            output.push("## ✅ Investigation Complete".to_string());
            output.push(String::new());
            output.push("All planned investigation steps have been executed.".to_string());
            output.push(String::new());
        }

        output.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::NO_RESPONSE;
    use crate::llm::client::mock::MockLlmClient;
    use crate::prompts::PromptLoader;
    use crate::report::FALLBACK_SUMMARY;

    fn formatter(client: MockLlmClient) -> ReportFormatter {
        ReportFormatter::new(Some("bedrock"))
            .with_prompt_loader(PromptLoader::embedded_only())
            .with_client(Arc::new(client))
    }

    fn plan(steps: &[&str]) -> InvestigationPlan {
        InvestigationPlan {
            steps: steps.iter().map(|s| s.to_string()).collect(),
            complexity: "medium".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_full_report_with_runbook_steps() {
        let fmt = formatter(MockLlmClient::always("## Summary\nAll good"));
        let results = AgentResults::from([
            ("runbooks_agent", "1. Check CPU\n2. Check DB"),
            ("logs_agent", NO_RESPONSE),
        ]);
        let metadata = InvestigationMetadata::default();
        let steps = plan(&["Check CPU", "Check DB", "Check network"]);

        let report = fmt
            .format_investigation_response("Why is checkout slow?", &results, &metadata, Some(&steps), None)
            .await;

        assert!(report.starts_with("# 🔍 Investigation Results\n\n**Query:** Why is checkout slow?\n"));
        assert!(report.contains("## Summary\nAll good"));
        assert!(report.contains("## 🎯 Key Findings"));
        assert!(report.contains("### Runbooks Agent"));
        assert!(report.contains("**Runbook Steps Found:**"));
        // Single-digit ordinal steps are reproduced verbatim
        assert!(report.contains("\n1. Check CPU\n"));
        assert!(report.contains("\n2. Check DB\n"));
        // Sentinel agent is omitted entirely
        assert!(!report.contains("Logs Agent"));
        // current_step=1 < total=3: remaining steps renumbered from 2
        assert!(report.contains("## 📋 Next Steps"));
        assert!(report.contains("\n2. Check DB"));
        assert!(report.contains("\n3. Check network"));
        assert!(!report.contains("## ✅ Investigation Complete"));
    }

    #[tokio::test]
    async fn test_all_sentinel_results_omit_key_findings() {
        let fmt = formatter(MockLlmClient::always("summary"));
        let results = AgentResults::from([("logs_agent", NO_RESPONSE), ("metrics_agent", "")]);
        let metadata = InvestigationMetadata::default();

        let report = fmt
            .format_investigation_response("q", &results, &metadata, None, None)
            .await;

        assert!(!report.contains("## 🎯 Key Findings"));
        assert!(!report.contains("### "));
    }

    #[tokio::test]
    async fn test_empty_results_render_completion_only() {
        let fmt = formatter(MockLlmClient::always("unused"));
        let results = AgentResults::new();
        let metadata = InvestigationMetadata::default();

        let report = fmt
            .format_investigation_response("q", &results, &metadata, None, None)
            .await;

        assert!(!report.contains("## 🎯 Key Findings"));
        assert!(!report.contains("Executive Summary"));
        assert!(!report.contains("## 📋 Next Steps"));
        // Empty plan: total_steps=0, current_step=1, completion branch fires
        assert!(report.contains("## ✅ Investigation Complete"));
        assert!(report.contains("All planned investigation steps have been executed."));
    }

    #[tokio::test]
    async fn test_next_steps_and_complete_are_mutually_exclusive() {
        let fmt = formatter(MockLlmClient::always("s"));
        let results = AgentResults::from([("metrics_agent", "finding")]);
        let steps = plan(&["a", "b", "c"]);

        // In progress: plan_step=0 -> current=1 < 3
        let metadata = InvestigationMetadata {
            plan_step: 0,
            investigation_plan: None,
        };
        let report = fmt
            .format_investigation_response("q", &results, &metadata, Some(&steps), None)
            .await;
        assert!(report.contains("## 📋 Next Steps"));
        assert!(!report.contains("## ✅ Investigation Complete"));

        // Finished: plan_step=2 -> current=3 >= 3
        let metadata = InvestigationMetadata {
            plan_step: 2,
            investigation_plan: None,
        };
        let report = fmt
            .format_investigation_response("q", &results, &metadata, Some(&steps), None)
            .await;
        assert!(!report.contains("## 📋 Next Steps"));
        assert!(report.contains("## ✅ Investigation Complete"));
    }

    #[tokio::test]
    async fn test_metadata_plan_used_when_no_explicit_plan() {
        let fmt = formatter(MockLlmClient::always("s"));
        let results = AgentResults::from([("metrics_agent", "finding")]);
        let metadata = InvestigationMetadata {
            plan_step: 0,
            investigation_plan: Some(plan(&["from metadata", "second"])),
        };

        let report = fmt
            .format_investigation_response("q", &results, &metadata, None, None)
            .await;

        assert!(report.contains("## 📋 Next Steps"));
        assert!(report.contains("2. second"));
    }

    #[tokio::test]
    async fn test_explicit_plan_wins_over_metadata_plan() {
        let fmt = formatter(MockLlmClient::always("s"));
        let results = AgentResults::from([("metrics_agent", "finding")]);
        let metadata = InvestigationMetadata {
            plan_step: 0,
            investigation_plan: Some(plan(&["metadata step", "metadata tail"])),
        };
        let explicit = plan(&["explicit step", "explicit tail"]);

        let report = fmt
            .format_investigation_response("q", &results, &metadata, Some(&explicit), None)
            .await;

        assert!(report.contains("2. explicit tail"));
        assert!(!report.contains("metadata tail"));
    }

    #[tokio::test]
    async fn test_runbook_agent_without_steps_falls_back_to_raw_text() {
        let fmt = formatter(MockLlmClient::always("s"));
        let results = AgentResults::from([("operational_agent", "Consult the oncall handbook for details.")]);
        let metadata = InvestigationMetadata::default();

        let report = fmt
            .format_investigation_response("q", &results, &metadata, None, None)
            .await;

        assert!(report.contains("### Operational Agent"));
        assert!(!report.contains("**Runbook Steps Found:**"));
        assert!(report.contains("- Consult the oncall handbook for details."));
    }

    #[tokio::test]
    async fn test_non_runbook_agent_renders_raw_bullet() {
        let fmt = formatter(MockLlmClient::always("s"));
        let results = AgentResults::from([("metrics_agent", "1. looks numbered but is not a runbook")]);
        let metadata = InvestigationMetadata::default();

        let report = fmt
            .format_investigation_response("q", &results, &metadata, None, None)
            .await;

        // Step extraction only applies to runbook/operational agents
        assert!(!report.contains("**Runbook Steps Found:**"));
        assert!(report.contains("- 1. looks numbered but is not a runbook"));
    }

    #[tokio::test]
    async fn test_unordinal_steps_get_dash_prefix() {
        let fmt = formatter(MockLlmClient::always("s"));
        let results = AgentResults::from([("runbooks_agent", "10. double digit\n• bullet glyph")]);
        let metadata = InvestigationMetadata::default();

        let report = fmt
            .format_investigation_response("q", &results, &metadata, None, None)
            .await;

        assert!(report.contains("- 10. double digit"));
        assert!(report.contains("- • bullet glyph"));
    }

    #[tokio::test]
    async fn test_llm_failure_still_renders_with_fallback() {
        let fmt = formatter(MockLlmClient::failing("boom"));
        let results = AgentResults::from([("metrics_agent", "CPU at 95%")]);
        let metadata = InvestigationMetadata::default();

        let report = fmt
            .format_investigation_response("q", &results, &metadata, None, None)
            .await;

        assert!(report.contains(FALLBACK_SUMMARY));
        assert!(report.contains("## 🎯 Key Findings"));
    }

    #[tokio::test]
    async fn test_render_is_deterministic() {
        let fmt = formatter(MockLlmClient::always("## Summary\nstable"));
        let results = AgentResults::from([
            ("runbooks_agent", "1. step one\n- extra"),
            ("metrics_agent", "CPU at 95%"),
        ]);
        let metadata = InvestigationMetadata {
            plan_step: 0,
            investigation_plan: Some(plan(&["a", "b"])),
        };

        let first = fmt
            .format_investigation_response("q", &results, &metadata, None, None)
            .await;
        let second = fmt
            .format_investigation_response("q", &results, &metadata, None, None)
            .await;

        assert_eq!(first, second);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("runbooks_agent"), "Runbooks Agent");
        assert_eq!(display_name("logs_agent"), "Logs Agent");
        assert_eq!(display_name("metrics"), "Metrics");
    }
}
