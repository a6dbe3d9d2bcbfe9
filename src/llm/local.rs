use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::config::LlmConfig;
use crate::errors::PhishGuardError;
use crate::models::LlmScore;
use super::prompt::{build_prompt, SYSTEM_PROMPT};
use super::scorer::LlmScorer;

/// Scores page text against an OpenAI-compatible local endpoint (ollama
/// by default). The engine wraps calls in its own deadline; request-level
/// timeouts still map to `Timeout` here.
pub struct LocalScorer {
    client: Client,
    base_url: String,
    model: String,
}

impl LocalScorer {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        }
    }

    async fn complete(&self, prompt: &str) -> Result<String, PhishGuardError> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
            "temperature": 0.2,
            "max_tokens": 600,
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PhishGuardError::Timeout(format!("LLM request timed out: {e}"))
                } else {
                    PhishGuardError::ServiceUnavailable(format!("LLM request failed: {e}"))
                }
            })?;

        let data: Value = resp
            .json()
            .await
            .map_err(|e| PhishGuardError::MalformedResponse(format!("parse error: {e}")))?;

        let content = data["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                PhishGuardError::MalformedResponse("no completion content in response".into())
            })?;
        Ok(content.to_string())
    }

    /// Pull the likelihood out of the model's reply. Models wrap JSON in
    /// prose often enough that we fall back to the outermost brace window.
    fn parse_score(text: &str) -> Result<LlmScore, PhishGuardError> {
        let parsed: Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(_) => {
                let start = text.find('{');
                let end = text.rfind('}');
                match (start, end) {
                    (Some(s), Some(e)) if s < e => {
                        serde_json::from_str(&text[s..=e]).map_err(|err| {
                            PhishGuardError::MalformedResponse(format!("JSON error: {err}"))
                        })?
                    }
                    _ => {
                        return Err(PhishGuardError::MalformedResponse(
                            "no JSON object in LLM response".into(),
                        ))
                    }
                }
            }
        };

        let likelihood = parsed["phishing_likelihood"].as_f64().ok_or_else(|| {
            PhishGuardError::MalformedResponse("missing phishing_likelihood field".into())
        })?;

        if !likelihood.is_finite() || !(0.0..=100.0).contains(&likelihood) {
            return Err(PhishGuardError::MalformedResponse(format!(
                "phishing_likelihood out of range: {likelihood}"
            )));
        }

        LlmScore::new(likelihood / 100.0)
    }
}

#[async_trait]
impl LlmScorer for LocalScorer {
    async fn score_text(&self, page_text: &str) -> Result<LlmScore, PhishGuardError> {
        let prompt = build_prompt(page_text);
        let reply = self.complete(&prompt).await?;
        Self::parse_score(&reply)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clean_json() {
        let score =
            LocalScorer::parse_score(r#"{"phishing_likelihood": 85, "reasoning": "forms"}"#)
                .unwrap();
        assert!((score.value() - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_parse_json_wrapped_in_prose() {
        let reply = "Here is my analysis:\n{\"phishing_likelihood\": 40}\nHope that helps.";
        let score = LocalScorer::parse_score(reply).unwrap();
        assert!((score.value() - 0.40).abs() < 1e-9);
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let err = LocalScorer::parse_score(r#"{"confidence": 90}"#).unwrap_err();
        assert!(matches!(err, PhishGuardError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_rejects_no_json() {
        let err = LocalScorer::parse_score("I think it is phishing.").unwrap_err();
        assert!(matches!(err, PhishGuardError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_rejects_out_of_range_likelihood() {
        let err = LocalScorer::parse_score(r#"{"phishing_likelihood": 250}"#).unwrap_err();
        assert!(matches!(err, PhishGuardError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_accepts_boundary_values() {
        assert_eq!(
            LocalScorer::parse_score(r#"{"phishing_likelihood": 0}"#)
                .unwrap()
                .value(),
            0.0
        );
        assert_eq!(
            LocalScorer::parse_score(r#"{"phishing_likelihood": 100}"#)
                .unwrap()
                .value(),
            1.0
        );
    }
}
