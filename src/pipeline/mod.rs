pub mod combiner;
pub mod engine;
pub mod strategy;

pub use combiner::DecisionCombiner;
pub use engine::{ensure_scheme, Engine};
pub use strategy::{CombinationStrategy, EqualWeight};
