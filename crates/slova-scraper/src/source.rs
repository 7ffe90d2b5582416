use async_trait::async_trait;
use reqwest::StatusCode;
use slova_config::source::SourceConfig;

use crate::error::ScrapeError;

/// Anything that can hand back the HTML of a page
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page body. Only a 200 response counts as success.
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Plain HTTP GET, no retries and no timeout
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(config: &SourceConfig) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        // Decoded by the Content-Type charset; invalid bytes become U+FFFD
        let body = response.text().await?;
        tracing::debug!("Received {} bytes from {url}", body.len());

        Ok(body)
    }
}
