use std::collections::BTreeMap;
use crate::models::{HeuristicScore, HeuristicSignals};

/// Default per-signal weights, reflecting how strongly each content signal
/// indicates phishing. Operators override individual entries via
/// `heuristic_weights` in the engine config.
const DEFAULT_WEIGHTS: &[(&str, f64)] = &[
    ("form_presence", 0.7),
    ("external_form_count", 0.5),
    ("password_fields", 0.6),
    ("suspicious_keywords", 0.6),
    ("social_engineering", 0.7),
    ("urgency_tactics", 0.5),
    ("sensitive_data_requests", 0.6),
    ("popup_count", 0.5),
    ("ad_density", 0.2),
    ("iframe_presence", 0.2),
    ("hidden_elements", 0.4),
    ("suspicious_javascript", 0.2),
    ("redirect_count", 0.3),
    ("suspicious_link_ratio", 0.5),
];

/// Weight applied to signals the analyzer emits but no weight table names.
const UNKNOWN_SIGNAL_WEIGHT: f64 = 0.5;

/// The sentinel score reported when no signals could be computed:
/// maximal uncertainty rather than a failure.
const DEGRADED_SCORE: f64 = 0.5;

/// Converts page-content signals into one bounded risk score via a
/// normalized weighted sum. Pure function of its inputs; monotonic
/// non-decreasing in every signal value.
pub struct HeuristicScorer {
    weights: BTreeMap<String, f64>,
}

impl HeuristicScorer {
    /// Build a scorer from config overrides layered over the defaults.
    pub fn new(overrides: &BTreeMap<String, f64>) -> Self {
        let mut weights: BTreeMap<String, f64> = DEFAULT_WEIGHTS
            .iter()
            .map(|(name, w)| (name.to_string(), *w))
            .collect();
        for (name, w) in overrides {
            weights.insert(name.clone(), *w);
        }
        Self { weights }
    }

    pub fn score(&self, signals: &HeuristicSignals) -> HeuristicScore {
        if signals.is_empty() {
            return HeuristicScore { value: DEGRADED_SCORE, degraded: true };
        }

        let mut weighted_sum = 0.0;
        let mut weight_sum = 0.0;
        for (name, value) in signals.iter() {
            let weight = self.weights.get(name).copied().unwrap_or(UNKNOWN_SIGNAL_WEIGHT);
            weighted_sum += weight * value;
            weight_sum += weight;
        }

        if weight_sum <= 0.0 {
            // Every present signal was zero-weighted away by the operator.
            return HeuristicScore { value: DEGRADED_SCORE, degraded: true };
        }

        HeuristicScore {
            value: (weighted_sum / weight_sum).clamp(0.0, 1.0),
            degraded: false,
        }
    }
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::new(&BTreeMap::new())
    }
}
