use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use crate::classifier::{LexicalClassifier, UrlClassifier};
use crate::config::EngineConfig;
use crate::content::{ContentFetcher, HeuristicAnalyzer, HttpFetcher};
use crate::errors::PhishGuardError;
use crate::features;
use crate::heuristics::HeuristicScorer;
use crate::llm::{LlmScorer, LocalScorer};
use crate::models::{FinalVerdict, HeuristicScore, LlmScore};
use super::combiner::DecisionCombiner;
use super::strategy::{CombinationStrategy, EqualWeight};

/// End-to-end evaluation pipeline: URL classification, escalation gating,
/// concurrent content scoring, and the final decision combination.
///
/// Holds no mutable state; one engine serves concurrent requests, with the
/// classifier's model treated as read-only.
pub struct Engine {
    config: EngineConfig,
    classifier: Arc<dyn UrlClassifier>,
    fetcher: Arc<dyn ContentFetcher>,
    llm: Arc<dyn LlmScorer>,
    analyzer: HeuristicAnalyzer,
    scorer: HeuristicScorer,
    combiner: DecisionCombiner,
}

impl Engine {
    pub fn new(
        config: EngineConfig,
        classifier: Arc<dyn UrlClassifier>,
        fetcher: Arc<dyn ContentFetcher>,
        llm: Arc<dyn LlmScorer>,
    ) -> Self {
        let scorer = HeuristicScorer::new(&config.heuristic_weights);
        let combiner = DecisionCombiner::new(config.thresholds, Arc::new(EqualWeight));
        Self {
            config,
            classifier,
            fetcher,
            llm,
            analyzer: HeuristicAnalyzer::new(),
            scorer,
            combiner,
        }
    }

    /// Build an engine with the stock collaborators: the lexical URL
    /// classifier, an HTTP fetcher, and the local LLM endpoint.
    pub fn from_config(config: EngineConfig) -> Result<Self, PhishGuardError> {
        config.validate()?;
        let classifier = Arc::new(LexicalClassifier::new(config.thresholds.url_decision));
        let fetcher = Arc::new(HttpFetcher::new(&config.fetch)?);
        let llm = Arc::new(LocalScorer::new(&config.llm));
        Ok(Self::new(config, classifier, fetcher, llm))
    }

    /// Swap the combination strategy (default: fixed 50/50 weighting).
    pub fn with_strategy(mut self, strategy: Arc<dyn CombinationStrategy>) -> Self {
        self.combiner = DecisionCombiner::new(self.config.thresholds, strategy);
        self
    }

    /// Evaluate one URL to a final verdict.
    ///
    /// Stage-1 failures (unparseable URL, unavailable model, bad feature
    /// vector) abort the request. Stage-2 failures degrade the verdict
    /// instead: the caller always gets either a verdict or a stage-1 error,
    /// never an unhandled fault.
    pub async fn evaluate(&self, url: &str) -> Result<FinalVerdict, PhishGuardError> {
        let features = features::extract(url)?;
        let url_verdict = self.classifier.classify(&features)?;
        debug!(url, probability = url_verdict.probability, "URL classified");

        // Content fetching and LLM scoring are expensive; clearly
        // legitimate URLs skip them entirely.
        if url_verdict.probability < self.config.thresholds.escalation {
            info!(url, score = url_verdict.probability, "Short-circuit: below escalation threshold");
            return Ok(self.combiner.short_circuit(url, url_verdict));
        }

        let page_text = match self.fetcher.fetch(url).await {
            Ok(text) => text,
            Err(e) => {
                warn!(url, error = %e, "Fetch failed, degrading to URL-stage signals");
                let heuristic = HeuristicScore { value: 0.5, degraded: true };
                return Ok(self.combiner.combine(url, url_verdict, heuristic, None));
            }
        };

        // Heuristic and LLM scoring are independent reads of the same
        // fetched page; the combiner is the join point.
        let llm_deadline = Duration::from_millis(self.config.llm.timeout_ms);
        let (signals, llm_result) = tokio::join!(
            async { self.analyzer.analyze(&page_text) },
            timeout(llm_deadline, self.llm.score_text(&page_text)),
        );

        let heuristic = self.scorer.score(&signals);
        let llm_score: Option<LlmScore> = match llm_result {
            Ok(Ok(score)) => Some(score),
            Ok(Err(e)) => {
                warn!(url, error = %e, "LLM scoring failed, falling back to heuristic score");
                None
            }
            Err(_) => {
                warn!(url, timeout_ms = self.config.llm.timeout_ms, "LLM scoring timed out");
                None
            }
        };

        let verdict = self.combiner.combine(url, url_verdict, heuristic, llm_score);
        info!(
            url,
            combined_score = verdict.combined_score,
            label = ?verdict.label,
            degraded = verdict.degraded,
            "Evaluation complete"
        );
        Ok(verdict)
    }
}

/// URLs arriving without a scheme default to https, matching what users
/// paste into the API.
pub fn ensure_scheme(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}
