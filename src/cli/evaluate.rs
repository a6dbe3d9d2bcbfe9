use crate::config::EngineConfig;
use crate::errors::PhishGuardError;
use crate::pipeline::{ensure_scheme, Engine};
use super::commands::EvaluateArgs;

pub async fn handle_evaluate(args: EvaluateArgs) -> Result<(), PhishGuardError> {
    let mut config = load_config(args.config.as_deref()).await?;
    if let Some(base_url) = args.base_url {
        config.llm.base_url = base_url;
    }
    if let Some(model) = args.model {
        config.llm.model = model;
    }
    if let Some(timeout_ms) = args.llm_timeout_ms {
        config.llm.timeout_ms = timeout_ms;
    }

    let engine = Engine::from_config(config)?;
    let url = ensure_scheme(&args.url);
    let verdict = engine.evaluate(&url).await?;

    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}

pub async fn load_config(path: Option<&str>) -> Result<EngineConfig, PhishGuardError> {
    match path {
        Some(p) => crate::config::parse_config(std::path::Path::new(p)).await,
        None => Ok(EngineConfig::default()),
    }
}
