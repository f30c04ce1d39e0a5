//! HTTP `PUT` store backed by reqwest.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::{ObjectStore, UploadStatus, object_url};
use crate::error::SeedError;

/// Object store reached over plain HTTP.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    /// Create a store rooted at `base_url` (e.g. `http://host:9000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, SeedError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("seedart/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SeedError::Transport(format!("HTTP client error: {}", e)))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a store with a preconfigured client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for HttpStore {
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> UploadStatus {
        let url = object_url(&self.base_url, key);
        match self
            .client
            .put(&url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
        {
            Ok(response) => UploadStatus::Response(response.status().as_u16()),
            Err(e) => UploadStatus::Failed(e.to_string()),
        }
    }
}
