//! Summarizer port
//!
//! Defines the interface for prescriptive surplus analysis. Treated as an
//! opaque text-in/structured-out collaborator; the LLM adapter implements
//! it, and the deterministic estimate stands in when no model is available.

use thiserror::Error;

use super::super::models::SurplusAnalysis;

/// Errors that can occur when requesting an analysis
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// No API key was configured
    #[error("missing API key: set the {0} environment variable")]
    MissingApiKey(&'static str),

    /// The request could not be sent or the service answered with an error
    #[error("summarizer request failed: {0}")]
    Request(String),

    /// The reply arrived but its envelope was not in the expected shape
    #[error("unexpected summarizer response: {0}")]
    BadResponse(String),
}

/// Produces a structured action plan for one surplus item
pub trait Summarizer: Send + Sync {
    /// Analyze a surplus quantity of one item
    fn analyze(&self, item: &str, surplus_kg: f64) -> Result<SurplusAnalysis, SummarizerError>;
}
