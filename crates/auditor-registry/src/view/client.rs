use serde_json::Value;

/// Typed client for the two registry endpoints the list view uses.
///
/// `base_url` is a plain prefix glued onto both paths. It is usually an
/// origin like `http://127.0.0.1:3000`, but any prefix works, including the
/// empty string for relative requests behind a proxy.
pub struct RegistryApi {
    client: reqwest::Client,
    base_url: String,
}

impl RegistryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET {base}/api/auditors`, decoded as a JSON sequence of records whose
    /// shape this client does not constrain.
    pub async fn fetch_auditors(&self) -> Result<Vec<Value>, ClientError> {
        let response = self
            .client
            .get(self.url("/api/auditors"))
            .send()
            .await
            .map_err(ClientError::Http)?;

        if !response.status().is_success() {
            return Err(ClientError::ListRejected);
        }

        let records = response.json::<Vec<Value>>().await?;
        Ok(records)
    }

    /// `POST {base}/api/auditors/ingest`. The response body is informational
    /// only and ignored here; success is the status class.
    pub async fn start_ingestion(&self) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url("/api/auditors/ingest"))
            .send()
            .await
            .map_err(ClientError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::IngestionRejected {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

/// Failures surfaced to the view. The two rejection variants carry the exact
/// phrasing the view's error banner contract expects.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The list endpoint answered outside the success range.
    #[error("Network response was not ok")]
    ListRejected,
    /// The ingestion trigger answered outside the success range.
    #[error("Server returned status: {status}")]
    IngestionRejected { status: u16 },
    /// The request never completed, or the list body was not valid JSON.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
