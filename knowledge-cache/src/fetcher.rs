use async_trait::async_trait;
use bytes::Bytes;
use common::error::AppError;
use tracing::debug;

#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Retrieves the raw body behind `url`. Any non-success status is an error.
    async fn fetch(&self, url: &str) -> Result<Bytes, AppError>;
}

#[derive(Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, AppError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(AppError::Processing(format!(
                "Fetching {url} returned status {status}"
            )));
        }

        let body = response.bytes().await?;
        debug!(url = %url, bytes = body.len(), "Fetched document body");

        Ok(body)
    }
}
