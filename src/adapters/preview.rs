use crate::domain::ports::PreviewService;
use crate::utils::error::Result;
use reqwest::Client;
use url::Url;

/// Client for the preview-image service: trades a full-size image URL for a
/// low-resolution placeholder. Best-effort — a response without a result maps
/// to `None` and the caller keeps the original URL.
#[derive(Debug, Clone)]
pub struct PreviewClient {
    endpoint: String,
    client: Client,
}

impl PreviewClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

impl PreviewService for PreviewClient {
    async fn placeholder_for(&self, image_url: &str) -> Result<Option<String>> {
        let mut request_url = Url::parse(&self.endpoint)?;
        request_url
            .query_pairs_mut()
            .append_pair("url", image_url);

        tracing::debug!("Preview request for: {}", image_url);
        let response = self
            .client
            .get(request_url)
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;
        let placeholder = body
            .get("url")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        Ok(placeholder)
    }
}
