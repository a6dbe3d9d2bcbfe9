pub mod scorer;

pub use scorer::HeuristicScorer;
