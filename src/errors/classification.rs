use super::types::PhishGuardError;

/// Where an error sits in the request lifecycle. Stage-1 errors abort the
/// request outright; stage-2 errors are absorbed by the degraded-fallback
/// paths in the decision combiner and never surface to the caller.
#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub fatal: bool,
}

impl PhishGuardError {
    /// Classify this error to determine its type and whether it aborts
    /// the evaluation request.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // Stage 1: no verdict is possible without URL features.
            PhishGuardError::UnparseableUrl(_) => ErrorClassification {
                error_type: "UnparseableUrl",
                fatal: true,
            },
            PhishGuardError::ModelUnavailable(_) => ErrorClassification {
                error_type: "ModelUnavailable",
                fatal: true,
            },
            PhishGuardError::InvalidFeatureVector(_) => ErrorClassification {
                error_type: "InvalidFeatureVector",
                fatal: true,
            },

            // Stage 2: recoverable via degraded fallback.
            PhishGuardError::FetchFailed(_) => ErrorClassification {
                error_type: "FetchFailed",
                fatal: false,
            },
            PhishGuardError::Timeout(_) => ErrorClassification {
                error_type: "Timeout",
                fatal: false,
            },
            PhishGuardError::ServiceUnavailable(_) => ErrorClassification {
                error_type: "ServiceUnavailable",
                fatal: false,
            },
            PhishGuardError::MalformedResponse(_) => ErrorClassification {
                error_type: "MalformedResponse",
                fatal: false,
            },

            // Ambient errors surface before any verdict work starts.
            PhishGuardError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                fatal: true,
            },
            PhishGuardError::Io(_) => ErrorClassification {
                error_type: "IoError",
                fatal: true,
            },
            PhishGuardError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                fatal: true,
            },
            PhishGuardError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                fatal: true,
            },
        }
    }
}
