use std::sync::Arc;
use tracing::info;
use crate::api;
use crate::errors::PhishGuardError;
use crate::pipeline::Engine;
use super::commands::ServeArgs;
use super::evaluate::load_config;

pub async fn handle_serve(args: ServeArgs) -> Result<(), PhishGuardError> {
    info!(host = %args.host, port = args.port, "Starting API server");

    let config = load_config(args.config.as_deref()).await?;
    let engine = Arc::new(Engine::from_config(config)?);
    let app = api::build_router(api::AppState { engine });

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
