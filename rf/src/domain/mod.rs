//! Domain types for investigation reports
//!
//! Inputs to the report formatter: per-agent free-text results, the
//! structured investigation plan, and progress metadata. Missing fields
//! default at deserialization time so callers never branch on absence.

mod plan;
mod results;

pub use plan::{InvestigationMetadata, InvestigationPlan};
pub use results::{AgentResults, NO_RESPONSE, UserPreferences};
