pub mod lexical;

pub use lexical::LexicalClassifier;

use crate::errors::PhishGuardError;
use crate::models::{UrlFeatureVector, UrlVerdict};

/// Stage-1 URL classifier seam. Implementations must be deterministic for
/// a fixed model and feature vector, and safe for concurrent read access —
/// the engine shares one instance across requests.
///
/// Errors: `ModelUnavailable` when the underlying model cannot be loaded,
/// `InvalidFeatureVector` when the vector does not match the model schema.
/// Both abort the request; no verdict is possible without stage 1.
pub trait UrlClassifier: Send + Sync {
    fn classify(&self, features: &UrlFeatureVector) -> Result<UrlVerdict, PhishGuardError>;
}
