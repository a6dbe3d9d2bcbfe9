use std::sync::Arc;
use chrono::Utc;
use crate::config::ThresholdConfig;
use crate::models::{
    ContributingFactor, FinalVerdict, HeuristicScore, LlmScore, UrlVerdict, VerdictLabel,
};
use super::strategy::CombinationStrategy;

/// Merges the two-level signals into one final verdict. Pure function of
/// its inputs plus configuration: no state is retained between calls, so
/// concurrent use needs no synchronization.
pub struct DecisionCombiner {
    thresholds: ThresholdConfig,
    strategy: Arc<dyn CombinationStrategy>,
}

impl DecisionCombiner {
    pub fn new(thresholds: ThresholdConfig, strategy: Arc<dyn CombinationStrategy>) -> Self {
        Self { thresholds, strategy }
    }

    /// Verdict for a URL the classifier found clearly legitimate: content
    /// analysis never ran, so the URL probability stands alone.
    pub fn short_circuit(&self, url: &str, url_verdict: UrlVerdict) -> FinalVerdict {
        FinalVerdict {
            url: url.to_string(),
            combined_score: url_verdict.probability,
            label: VerdictLabel::Legitimate,
            contributing_factors: vec![ContributingFactor::new(
                "url_probability",
                1.0,
                url_verdict.probability,
            )],
            degraded: false,
            evaluated_at: Utc::now(),
        }
    }

    /// Verdict after content analysis. With both scores available the
    /// strategy merges them; if the LLM failed, the heuristic score stands
    /// alone and the verdict is flagged degraded. A degraded heuristic
    /// keeps its sentinel contribution as-is — there is no third fallback.
    pub fn combine(
        &self,
        url: &str,
        url_verdict: UrlVerdict,
        heuristic: HeuristicScore,
        llm: Option<LlmScore>,
    ) -> FinalVerdict {
        let mut factors = vec![ContributingFactor::new(
            "url_probability",
            0.0,
            url_verdict.probability,
        )];

        let (combined_score, degraded) = match llm {
            Some(llm_score) => {
                factors.push(ContributingFactor::new(
                    "heuristic_score",
                    self.strategy.heuristic_weight(),
                    heuristic.value,
                ));
                factors.push(ContributingFactor::new(
                    "llm_score",
                    self.strategy.llm_weight(),
                    llm_score.value(),
                ));
                (
                    self.strategy.combine(heuristic.value, llm_score.value()),
                    heuristic.degraded,
                )
            }
            None => {
                factors.push(ContributingFactor::new(
                    "heuristic_score",
                    1.0,
                    heuristic.value,
                ));
                (heuristic.value, true)
            }
        };

        FinalVerdict {
            url: url.to_string(),
            combined_score,
            label: self.label(combined_score),
            contributing_factors: factors,
            degraded,
            evaluated_at: Utc::now(),
        }
    }

    fn label(&self, score: f64) -> VerdictLabel {
        if score >= self.thresholds.phishing {
            VerdictLabel::Phishing
        } else if score >= self.thresholds.suspicious {
            VerdictLabel::Suspicious
        } else {
            VerdictLabel::Legitimate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::strategy::EqualWeight;

    fn combiner() -> DecisionCombiner {
        DecisionCombiner::new(ThresholdConfig::default(), Arc::new(EqualWeight))
    }

    fn ok_heuristic(value: f64) -> HeuristicScore {
        HeuristicScore { value, degraded: false }
    }

    #[test]
    fn test_short_circuit_keeps_url_probability() {
        let verdict = combiner().short_circuit("https://a.example/", UrlVerdict::new(0.05, 0.5));
        assert_eq!(verdict.combined_score, 0.05);
        assert_eq!(verdict.label, VerdictLabel::Legitimate);
        assert_eq!(verdict.contributing_factors.len(), 1);
        assert_eq!(verdict.contributing_factors[0].source, "url_probability");
        assert_eq!(verdict.contributing_factors[0].weight, 1.0);
        assert!(!verdict.degraded);
    }

    #[test]
    fn test_combine_is_exact_equal_weighting() {
        let verdict = combiner().combine(
            "https://a.example/",
            UrlVerdict::new(0.85, 0.5),
            ok_heuristic(0.8),
            Some(LlmScore::new(0.6).unwrap()),
        );
        assert!((verdict.combined_score - 0.7).abs() < 1e-9);
        assert_eq!(verdict.label, VerdictLabel::Phishing);
        assert!(!verdict.degraded);
    }

    #[test]
    fn test_combine_lists_all_participating_factors() {
        let verdict = combiner().combine(
            "https://a.example/",
            UrlVerdict::new(0.5, 0.5),
            ok_heuristic(0.4),
            Some(LlmScore::new(0.3).unwrap()),
        );
        let sources: Vec<&str> = verdict
            .contributing_factors
            .iter()
            .map(|f| f.source.as_str())
            .collect();
        assert_eq!(sources, vec!["url_probability", "heuristic_score", "llm_score"]);
        assert_eq!(verdict.contributing_factors[1].weight, 0.5);
        assert_eq!(verdict.contributing_factors[2].weight, 0.5);
    }

    #[test]
    fn test_llm_failure_falls_back_to_heuristic_alone() {
        let verdict = combiner().combine(
            "https://a.example/",
            UrlVerdict::new(0.6, 0.5),
            ok_heuristic(0.55),
            None,
        );
        assert_eq!(verdict.combined_score, 0.55);
        assert!(verdict.degraded);
        assert_eq!(verdict.contributing_factors[1].weight, 1.0);
        assert!(verdict
            .contributing_factors
            .iter()
            .all(|f| f.source != "llm_score"));
    }

    #[test]
    fn test_degraded_heuristic_contribution_retained() {
        let verdict = combiner().combine(
            "https://a.example/",
            UrlVerdict::new(0.6, 0.5),
            HeuristicScore { value: 0.5, degraded: true },
            Some(LlmScore::new(0.9).unwrap()),
        );
        assert!((verdict.combined_score - 0.7).abs() < 1e-9);
        assert!(verdict.degraded);
    }

    #[test]
    fn test_label_boundary_phishing_at_exact_threshold() {
        let verdict = combiner().combine(
            "https://a.example/",
            UrlVerdict::new(0.9, 0.5),
            ok_heuristic(0.7),
            Some(LlmScore::new(0.7).unwrap()),
        );
        assert_eq!(verdict.label, VerdictLabel::Phishing);
    }

    #[test]
    fn test_label_boundary_suspicious_at_exact_threshold() {
        let verdict = combiner().combine(
            "https://a.example/",
            UrlVerdict::new(0.9, 0.5),
            ok_heuristic(0.4),
            Some(LlmScore::new(0.4).unwrap()),
        );
        assert_eq!(verdict.label, VerdictLabel::Suspicious);
    }

    #[test]
    fn test_label_just_below_suspicious_is_legitimate() {
        let verdict = combiner().combine(
            "https://a.example/",
            UrlVerdict::new(0.9, 0.5),
            ok_heuristic(0.39999),
            Some(LlmScore::new(0.39999).unwrap()),
        );
        assert_eq!(verdict.label, VerdictLabel::Legitimate);
    }

    #[test]
    fn test_custom_thresholds_respected() {
        let thresholds = ThresholdConfig {
            escalation: 0.3,
            phishing: 0.9,
            suspicious: 0.6,
            url_decision: 0.5,
        };
        let combiner = DecisionCombiner::new(thresholds, Arc::new(EqualWeight));
        let verdict = combiner.combine(
            "https://a.example/",
            UrlVerdict::new(0.9, 0.5),
            ok_heuristic(0.7),
            Some(LlmScore::new(0.7).unwrap()),
        );
        assert_eq!(verdict.label, VerdictLabel::Suspicious);
    }
}
