pub mod analyzer;
pub mod fetcher;

pub use analyzer::HeuristicAnalyzer;
pub use fetcher::{ContentFetcher, HttpFetcher};
