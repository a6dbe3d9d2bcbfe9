use std::path::Path;
use crate::errors::PhishGuardError;
use super::types::EngineConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<EngineConfig, PhishGuardError> {
    if !path.exists() {
        return Err(PhishGuardError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(PhishGuardError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: EngineConfig = serde_yaml::from_value(yaml)?;

    // Semantic validation (threshold ordering, weight ranges)
    config.validate()?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), PhishGuardError> {
    let json_str = serde_json::to_string(yaml)
        .map_err(|e| PhishGuardError::Config(format!("Config conversion error: {e}")))?;
    let json_value: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| PhishGuardError::Config(format!("Config conversion error: {e}")))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| PhishGuardError::Config(format!("Schema compilation error: {e}")))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        let messages: Vec<String> = errors
            .map(|e| format!("{} at {}", e, e.instance_path))
            .collect();
        if !messages.is_empty() {
            // Warn but don't fail — schema validation is advisory,
            // config.validate() enforces the hard constraints
            for msg in &messages {
                warn!(validation_error = %msg, "Config schema warning");
            }
        }
    }

    Ok(())
}
