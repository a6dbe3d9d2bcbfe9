use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::errors::PhishGuardError;

/// Named page-content signals, each normalized to [0,1]. Built fresh per
/// page fetch and never persisted. Iteration order is stable (sorted by
/// name) so verdicts are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeuristicSignals(BTreeMap<String, f64>);

impl HeuristicSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a signal, clamping the value into [0,1]. Non-finite values
    /// are dropped rather than stored.
    pub fn set(&mut self, name: &str, value: f64) {
        if value.is_finite() {
            self.0.insert(name.to_string(), value.clamp(0.0, 1.0));
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Aggregate content risk in [0,1]. `degraded` is set when no signals
/// could be computed and the sentinel 0.5 was substituted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeuristicScore {
    pub value: f64,
    pub degraded: bool,
}

/// Phishing probability reported by the LLM collaborator. Treated as
/// untrusted input: construction rejects anything outside [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LlmScore(f64);

impl LlmScore {
    pub fn new(value: f64) -> Result<Self, PhishGuardError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(PhishGuardError::MalformedResponse(format!(
                "LLM score out of range: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
