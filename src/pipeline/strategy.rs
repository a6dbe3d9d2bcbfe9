/// How the two stage-2 scores merge into one combined score. Kept behind a
/// trait so a learned weighting can drop in later without touching the
/// combiner's pure-function contract.
pub trait CombinationStrategy: Send + Sync {
    fn heuristic_weight(&self) -> f64;
    fn llm_weight(&self) -> f64;

    fn combine(&self, heuristic: f64, llm: f64) -> f64 {
        (self.heuristic_weight() * heuristic + self.llm_weight() * llm).clamp(0.0, 1.0)
    }
}

/// Fixed 50/50 weighting: chosen for interpretability over marginal
/// accuracy gains.
pub struct EqualWeight;

impl CombinationStrategy for EqualWeight {
    fn heuristic_weight(&self) -> f64 {
        0.5
    }

    fn llm_weight(&self) -> f64 {
        0.5
    }
}
