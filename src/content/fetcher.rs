use std::time::Duration;
use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;
use crate::config::FetchConfig;
use crate::errors::PhishGuardError;

/// Webpage content collaborator. Returns the raw HTML body for a URL.
/// Failures here are stage-2: the engine degrades instead of aborting.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, PhishGuardError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, PhishGuardError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .redirect(Policy::limited(10))
            .build()
            .map_err(|e| PhishGuardError::FetchFailed(format!("client build failed: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, PhishGuardError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                PhishGuardError::Timeout(format!("fetch deadline exceeded for {url}"))
            } else {
                PhishGuardError::FetchFailed(format!("{url}: {e}"))
            }
        })?;

        let response = response
            .error_for_status()
            .map_err(|e| PhishGuardError::FetchFailed(format!("{url}: {e}")))?;

        response
            .text()
            .await
            .map_err(|e| PhishGuardError::FetchFailed(format!("{url}: body read failed: {e}")))
    }
}
