//! Embedded fallback prompts
//!
//! These are compiled into the library and used when no template files are
//! found on disk.

/// Template name for the executive summary system prompt
pub const EXECUTIVE_SUMMARY_SYSTEM_NAME: &str = "executive-summary-system";

/// Template name for the executive summary user prompt
pub const EXECUTIVE_SUMMARY_USER_NAME: &str = "executive-summary-user";

/// System prompt for executive summary generation
pub const EXECUTIVE_SUMMARY_SYSTEM: &str = r#"You are an expert Site Reliability Engineer producing the executive summary of a multi-agent incident investigation.

You will receive the operator's original query and the findings of each investigation agent. Write a concise executive summary in markdown with exactly this structure:

## 📋 Executive Summary

### 🎯 Key Insights
- **Root Cause**: the most likely root cause, stated plainly
- **Impact**: who or what is affected and how badly
- **Severity**: Low, Medium, High, or Critical

### ⚡ Next Steps
1. **Immediate** (< 1 hour): the first action to take
2. **Short-term** (< 24 hours): remediation to execute
3. **Long-term** (< 1 week): hardening or monitoring work
4. **Follow-up**: process actions such as a post-incident review

Base every statement on the findings provided. Do not invent metrics, services, or timelines the findings do not mention. Keep the whole summary under 250 words.
"#;

/// User prompt template for executive summary generation
///
/// Handlebars variables: `query`, `results_text`. Triple-stash so markdown
/// in agent findings is not HTML-escaped.
pub const EXECUTIVE_SUMMARY_USER: &str = r#"Original query:
{{{query}}}

Investigation findings:

{{{results_text}}}

Write the executive summary for this investigation.
"#;

/// Look up an embedded prompt by template name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        EXECUTIVE_SUMMARY_SYSTEM_NAME => Some(EXECUTIVE_SUMMARY_SYSTEM),
        EXECUTIVE_SUMMARY_USER_NAME => Some(EXECUTIVE_SUMMARY_USER),
        _ => None,
    }
}

/// Names of all embedded prompts
pub fn embedded_names() -> &'static [&'static str] {
    &[EXECUTIVE_SUMMARY_SYSTEM_NAME, EXECUTIVE_SUMMARY_USER_NAME]
}
