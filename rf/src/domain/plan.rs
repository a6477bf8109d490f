//! Investigation plan and progress metadata
//!
//! A plan is an ordered list of investigation steps plus labels describing
//! how it was produced. All defaults live here, in one place, rather than
//! at each access site.

use serde::{Deserialize, Serialize};

fn default_complexity() -> String {
    "unknown".to_string()
}

fn default_reasoning() -> String {
    "Standard investigation approach".to_string()
}

/// An ordered investigation plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestigationPlan {
    /// Ordered investigation steps
    pub steps: Vec<String>,

    /// Complexity label (e.g. "low", "medium", "high")
    pub complexity: String,

    /// Why the plan was shaped this way
    pub reasoning: String,

    /// Whether the plan may run without operator approval
    pub auto_execute: bool,
}

impl Default for InvestigationPlan {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            complexity: default_complexity(),
            reasoning: default_reasoning(),
            auto_execute: false,
        }
    }
}

impl InvestigationPlan {
    /// Number of steps in the plan
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Steps from the given zero-based position onward
    ///
    /// A position past the end yields an empty slice rather than panicking.
    pub fn remaining_steps(&self, from: usize) -> &[String] {
        &self.steps[from.min(self.steps.len())..]
    }
}

/// Progress metadata accompanying a set of agent results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestigationMetadata {
    /// Zero-based index of the last completed plan step
    pub plan_step: usize,

    /// Plan used when the caller supplies no explicit plan
    pub investigation_plan: Option<InvestigationPlan>,
}

impl InvestigationMetadata {
    /// One-based number of the step currently in progress
    pub fn current_step(&self) -> usize {
        self.plan_step + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_defaults() {
        let plan = InvestigationPlan::default();

        assert!(plan.steps.is_empty());
        assert_eq!(plan.complexity, "unknown");
        assert_eq!(plan.reasoning, "Standard investigation approach");
        assert!(!plan.auto_execute);
    }

    #[test]
    fn test_plan_deserialize_fills_missing_fields() {
        let plan: InvestigationPlan = serde_json::from_str(r#"{"steps": ["Check CPU"]}"#).unwrap();

        assert_eq!(plan.steps, vec!["Check CPU"]);
        assert_eq!(plan.complexity, "unknown");
        assert_eq!(plan.reasoning, "Standard investigation approach");
        assert!(!plan.auto_execute);
    }

    #[test]
    fn test_plan_deserialize_explicit_fields() {
        let plan: InvestigationPlan = serde_json::from_str(
            r#"{"steps": ["a", "b"], "complexity": "medium", "reasoning": "scoped", "auto_execute": true}"#,
        )
        .unwrap();

        assert_eq!(plan.total_steps(), 2);
        assert_eq!(plan.complexity, "medium");
        assert_eq!(plan.reasoning, "scoped");
        assert!(plan.auto_execute);
    }

    #[test]
    fn test_remaining_steps() {
        let plan = InvestigationPlan {
            steps: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            ..Default::default()
        };

        assert_eq!(plan.remaining_steps(1), &["b".to_string(), "c".to_string()]);
        assert_eq!(plan.remaining_steps(3), &[] as &[String]);
        assert_eq!(plan.remaining_steps(10), &[] as &[String]);
    }

    #[test]
    fn test_metadata_defaults() {
        let metadata: InvestigationMetadata = serde_json::from_str("{}").unwrap();

        assert_eq!(metadata.plan_step, 0);
        assert_eq!(metadata.current_step(), 1);
        assert!(metadata.investigation_plan.is_none());
    }

    #[test]
    fn test_metadata_with_nested_plan() {
        let metadata: InvestigationMetadata =
            serde_json::from_str(r#"{"plan_step": 2, "investigation_plan": {"steps": ["x"]}}"#).unwrap();

        assert_eq!(metadata.current_step(), 3);
        assert_eq!(metadata.investigation_plan.unwrap().steps, vec!["x"]);
    }
}
