use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub url: String,
}
