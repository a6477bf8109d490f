//! Per-agent investigation results
//!
//! Agent results arrive as free text keyed by agent name. Rendering order
//! must be deterministic, so results are kept as an ordered sequence of
//! pairs rather than a map.

use serde::{Deserialize, Serialize};

/// Sentinel text meaning an agent contributed nothing
pub const NO_RESPONSE: &str = "No response provided";

/// Opaque per-user preference records, passed through to the LLM context
pub type UserPreferences = Vec<serde_json::Value>;

/// Ordered mapping of agent name to free-text response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentResults(Vec<(String, String)>);

impl AgentResults {
    /// Create an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one agent's response, preserving insertion order
    pub fn push(&mut self, agent: impl Into<String>, response: impl Into<String>) {
        self.0.push((agent.into(), response.into()));
    }

    /// Whether any agent responded at all (sentinel responses included)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of agent entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(agent, response)| (agent.as_str(), response.as_str()))
    }

    /// Entries that actually carry content (non-empty, non-sentinel)
    pub fn contributing(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, response)| Self::has_content(response))
    }

    /// Whether at least one entry carries content
    pub fn has_contributions(&self) -> bool {
        self.contributing().next().is_some()
    }

    /// Whether a response text counts as a contribution
    pub fn has_content(response: &str) -> bool {
        !response.is_empty() && response != NO_RESPONSE
    }
}

impl FromIterator<(String, String)> for AgentResults {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for AgentResults {
    fn from(entries: [(&str, &str); N]) -> Self {
        entries
            .into_iter()
            .map(|(agent, response)| (agent.to_string(), response.to_string()))
            .collect()
    }
}
