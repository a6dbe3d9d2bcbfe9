use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhishGuardError {
    #[error("Unparseable URL: {0}")]
    UnparseableUrl(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Invalid feature vector: {0}")]
    InvalidFeatureVector(String),

    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("LLM service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
