use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Binary decision from the stage-1 URL classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlLabel {
    Phishing,
    Legitimate,
}

/// Output of the URL classifier for one feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UrlVerdict {
    pub probability: f64,
    pub label: UrlLabel,
    pub threshold: f64,
}

impl UrlVerdict {
    pub fn new(probability: f64, threshold: f64) -> Self {
        let label = if probability >= threshold {
            UrlLabel::Phishing
        } else {
            UrlLabel::Legitimate
        };
        Self { probability, label, threshold }
    }
}

/// Three-way decision from the combiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictLabel {
    Phishing,
    Suspicious,
    Legitimate,
}

/// One score that participated in a verdict: source name, the weight the
/// decision path assigned it, and its raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributingFactor {
    pub source: String,
    pub weight: f64,
    pub value: f64,
}

impl ContributingFactor {
    pub fn new(source: &str, weight: f64, value: f64) -> Self {
        Self { source: source.to_string(), weight, value }
    }
}

/// Terminal artifact of one evaluation request. Immutable once built;
/// `contributing_factors` makes the decision auditable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalVerdict {
    pub url: String,
    pub combined_score: f64,
    pub label: VerdictLabel,
    pub contributing_factors: Vec<ContributingFactor>,
    pub degraded: bool,
    pub evaluated_at: DateTime<Utc>,
}

/// Equality over the semantic fields only. Repeated evaluations of the same
/// URL with the same collaborator responses compare equal even though each
/// carries its own timestamp.
impl PartialEq for FinalVerdict {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
            && self.combined_score == other.combined_score
            && self.label == other.label
            && self.contributing_factors == other.contributing_factors
            && self.degraded == other.degraded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_verdict_labels_at_threshold() {
        let verdict = UrlVerdict::new(0.5, 0.5);
        assert_eq!(verdict.label, UrlLabel::Phishing);
    }

    #[test]
    fn test_url_verdict_below_threshold_is_legitimate() {
        let verdict = UrlVerdict::new(0.49, 0.5);
        assert_eq!(verdict.label, UrlLabel::Legitimate);
    }

    #[test]
    fn test_verdict_label_serializes_lowercase() {
        let json = serde_json::to_string(&VerdictLabel::Suspicious).unwrap();
        assert_eq!(json, "\"suspicious\"");
    }

    #[test]
    fn test_final_verdict_equality_ignores_timestamp() {
        let build = |at: DateTime<Utc>| FinalVerdict {
            url: "https://example.com".to_string(),
            combined_score: 0.55,
            label: VerdictLabel::Suspicious,
            contributing_factors: vec![ContributingFactor::new("heuristic_score", 1.0, 0.55)],
            degraded: true,
            evaluated_at: at,
        };
        let first = build(Utc::now());
        let second = build(first.evaluated_at + chrono::Duration::milliseconds(5));
        assert_eq!(first, second);
    }

    #[test]
    fn test_contributing_factor_roundtrip() {
        let factor = ContributingFactor::new("llm_score", 0.5, 0.6);
        let json = serde_json::to_string(&factor).unwrap();
        let parsed: ContributingFactor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, factor);
    }
}
