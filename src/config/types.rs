use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::errors::PhishGuardError;

/// Operator-tunable configuration for the evaluation engine. Every field
/// has a default so an empty file (or no file) yields a working engine.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    /// Per-signal weights for the heuristic risk scorer. Signals absent
    /// from this map fall back to the built-in defaults.
    #[serde(default)]
    pub heuristic_weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ThresholdConfig {
    /// Stage-2 content analysis runs only when the URL probability is at
    /// or above this value.
    #[serde(default = "default_escalation")]
    pub escalation: f64,
    /// Combined score at or above this labels the page phishing.
    #[serde(default = "default_phishing")]
    pub phishing: f64,
    /// Combined score at or above this (but below phishing) labels the
    /// page suspicious.
    #[serde(default = "default_suspicious")]
    pub suspicious: f64,
    /// Decision threshold for the stage-1 binary URL label.
    #[serde(default = "default_url_decision")]
    pub url_decision: f64,
}

fn default_escalation() -> f64 {
    0.3
}
fn default_phishing() -> f64 {
    0.7
}
fn default_suspicious() -> f64 {
    0.4
}
fn default_url_decision() -> f64 {
    0.5
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            escalation: default_escalation(),
            phishing: default_phishing(),
            suspicious: default_suspicious(),
            url_decision: default_url_decision(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    /// Deadline for one scoring call; on expiry the combiner falls back
    /// to the heuristic score alone.
    #[serde(default = "default_llm_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_llm_base_url() -> String {
    "http://localhost:11434/v1".to_string()
}
fn default_llm_model() -> String {
    "mistral".to_string()
}
fn default_llm_timeout_ms() -> u64 {
    20_000
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            timeout_ms: default_llm_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    #[serde(default = "default_fetch_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_fetch_timeout_ms() -> u64 {
    10_000
}
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_fetch_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl EngineConfig {
    /// Semantic validation beyond what the schema can express.
    pub fn validate(&self) -> Result<(), PhishGuardError> {
        let t = &self.thresholds;
        for (name, value) in [
            ("escalation", t.escalation),
            ("phishing", t.phishing),
            ("suspicious", t.suspicious),
            ("url_decision", t.url_decision),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PhishGuardError::Config(format!(
                    "threshold '{name}' must lie in [0,1], got {value}"
                )));
            }
        }
        if t.suspicious > t.phishing {
            return Err(PhishGuardError::Config(format!(
                "suspicious threshold ({}) exceeds phishing threshold ({})",
                t.suspicious, t.phishing
            )));
        }
        for (name, weight) in &self.heuristic_weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(PhishGuardError::Config(format!(
                    "heuristic weight '{name}' must be non-negative, got {weight}"
                )));
            }
        }
        if !self.heuristic_weights.is_empty()
            && self.heuristic_weights.values().all(|w| *w == 0.0)
        {
            return Err(PhishGuardError::Config(
                "heuristic weights must not all be zero".into(),
            ));
        }
        Ok(())
    }
}
