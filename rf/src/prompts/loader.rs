//! Prompt Loader
//!
//! Loads prompt templates from files or falls back to embedded defaults.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;

/// Context for rendering the executive summary user template
#[derive(Debug, Clone, Serialize)]
struct SummaryContext<'a> {
    query: &'a str,
    results_text: &'a str,
}

/// Loads and renders prompt templates
///
/// Template loading chain:
/// 1. `{root}/.reportforge/prompts/{name}.pmt` (user override)
/// 2. `{root}/prompts/{name}.pmt` (repo default)
/// 3. Embedded fallback
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory
    user_dir: Option<PathBuf>,
    /// Repo default directory
    repo_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a new prompt loader rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        debug!(?root, "PromptLoader::new: called");
        let user_dir = root.join(".reportforge").join("prompts");
        let repo_dir = root.join("prompts");

        Self {
            hbs: Handlebars::new(),
            user_dir: user_dir.exists().then_some(user_dir),
            repo_dir: repo_dir.exists().then_some(repo_dir),
        }
    }

    /// Create a loader that only uses embedded prompts
    pub fn embedded_only() -> Self {
        debug!("PromptLoader::embedded_only: called");
        Self {
            hbs: Handlebars::new(),
            user_dir: None,
            repo_dir: None,
        }
    }

    /// Load a template by name
    ///
    /// Checks the user override directory, then the repo directory, then
    /// the embedded fallbacks.
    fn load_template(&self, name: &str) -> Result<String> {
        debug!(%name, "load_template: called");
        for dir in [&self.user_dir, &self.repo_dir].into_iter().flatten() {
            let path = dir.join(format!("{name}.pmt"));
            if path.exists() {
                debug!(?path, "load_template: found on disk");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read prompt {}: {}", path.display(), e));
            }
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!(%name, "load_template: using embedded fallback");
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// System and user prompts for executive summary generation
    pub fn executive_summary_prompts(&self, query: &str, results_text: &str) -> Result<(String, String)> {
        debug!(
            query_len = query.len(),
            results_len = results_text.len(),
            "executive_summary_prompts: called"
        );
        let system_prompt = self
            .load_template(embedded::EXECUTIVE_SUMMARY_SYSTEM_NAME)?
            .trim()
            .to_string();

        let user_template = self.load_template(embedded::EXECUTIVE_SUMMARY_USER_NAME)?;
        let context = SummaryContext { query, results_text };
        let user_prompt = self
            .hbs
            .render_template(&user_template, &context)
            .map_err(|e| eyre!("Failed to render executive summary template: {}", e))?;

        Ok((system_prompt, user_prompt))
    }

    /// Names of all available prompts (on-disk overrides plus embedded)
    pub fn available_prompts(&self) -> Vec<String> {
        let mut names: Vec<String> = embedded::embedded_names().iter().map(|n| n.to_string()).collect();

        for dir in [&self.user_dir, &self.repo_dir].into_iter().flatten() {
            if let Ok(entries) = std::fs::read_dir(dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "pmt")
                        && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_string());
                    }
                }
            }
        }

        names.sort();
        names.dedup();
        names
    }
}
