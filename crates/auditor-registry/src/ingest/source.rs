use async_trait::async_trait;
use tracing::debug;

/// Where the registry CSV comes from. A trait seam so the ingestion workflow
/// can be driven from fixtures in tests.
#[async_trait]
pub trait RegistrySource: Send + Sync {
    /// Fetches the full export as text.
    async fn fetch_csv(&self) -> Result<String, SourceError>;
}

/// Failures while obtaining the export.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to download registry export: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("registry export request returned status {status}")]
    Status { status: u16 },
    #[error("registry export body was empty")]
    EmptyBody,
}

/// Downloads the export over HTTP from a fixed URL.
pub struct HttpRegistrySource {
    client: reqwest::Client,
    url: String,
}

impl HttpRegistrySource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RegistrySource for HttpRegistrySource {
    async fn fetch_csv(&self) -> Result<String, SourceError> {
        debug!(url = %self.url, "downloading registry export");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(SourceError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(SourceError::Transport)?;
        if body.trim().is_empty() {
            return Err(SourceError::EmptyBody);
        }

        Ok(body)
    }
}
