use async_trait::async_trait;
use crate::errors::PhishGuardError;
use crate::models::LlmScore;

/// LLM phishing-scoring collaborator, consumed as a black box that maps
/// page text to a probability.
///
/// Errors: `ServiceUnavailable` (runtime unreachable), `Timeout`
/// (deadline exceeded), `MalformedResponse` (output not parseable into a
/// probability). All three are stage-2: the combiner falls back to the
/// heuristic score alone.
#[async_trait]
pub trait LlmScorer: Send + Sync {
    async fn score_text(&self, page_text: &str) -> Result<LlmScore, PhishGuardError>;

    /// Model identifier for logging and verdict audit trails.
    fn model_name(&self) -> &str;
}
