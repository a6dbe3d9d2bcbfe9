pub mod local;
pub mod prompt;
pub mod scorer;

pub use local::LocalScorer;
pub use scorer::LlmScorer;
