//! Plan approval rendering
//!
//! Deterministic markdown for operator review of an investigation plan.
//! No LLM involvement and no failure modes.

use super::{ReportFormatter, title_case};
use crate::domain::InvestigationPlan;

impl ReportFormatter {
    /// Format a plan approval request in clean markdown
    pub fn format_plan_approval(&self, plan: &InvestigationPlan, query: &str) -> String {
        let mut output: Vec<String> = Vec::new();

        // Header
        output.push("# 📋 Investigation Plan".to_string());
        output.push(String::new());
        output.push(format!("**Query:** {query}"));
        output.push(format!("**Complexity:** {}", title_case(&plan.complexity)));
        output.push(String::new());

        // Plan Steps
        if !plan.steps.is_empty() {
            output.push("## Investigation Steps".to_string());
            output.push(String::new());
            for (i, step) in plan.steps.iter().enumerate() {
                output.push(format!("{}. {}", i + 1, step));
            }
            output.push(String::new());
        }

        // Plan Details
        output.push("## Plan Details".to_string());
        output.push(String::new());
        output.push(format!("**Reasoning:** {}", plan.reasoning));
        output.push(format!(
            "**Auto-execute:** {}",
            if plan.auto_execute { "Yes" } else { "No" }
        ));
        output.push(String::new());

        // Actions
        output.push("## Available Actions".to_string());
        output.push(String::new());
        output.push("- Type `proceed` or `yes` to execute the plan".to_string());
        output.push("- Type `modify` to suggest changes".to_string());
        output.push("- Ask specific questions about any step".to_string());
        output.push(String::new());

        output.join("\n")
    }
}
