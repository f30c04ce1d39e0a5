//! # Object Storage Upload
//!
//! Pushes encoded artworks to an S3-style bucket with plain HTTP `PUT`.
//!
//! The store is deliberately thin: no authentication, no retries and no
//! timeouts. Whatever happens is reported as an [`UploadStatus`] and the
//! caller moves on.
//!
//! ## Object Layout
//!
//! ```text
//! {base_url}/{bucket}/{identifier}.png
//! http://192.168.1.54:9000/artworks/b0000001-0000-0000-0000-000000000001.png
//! ```

mod http;

pub use http::HttpStore;

use async_trait::async_trait;
use std::fmt;

/// Default storage endpoint.
pub const DEFAULT_BASE_URL: &str = "http://192.168.1.54:9000";
/// Default bucket for artworks.
pub const DEFAULT_BUCKET: &str = "artworks";
/// Content type sent with every artwork.
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Outcome of a single upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    /// The server answered with this HTTP status code (any class).
    Response(u16),
    /// No HTTP response was received (connection refused, DNS, reset...).
    Failed(String),
}

impl UploadStatus {
    /// Whether the server answered with a 2xx status.
    pub fn is_success(&self) -> bool {
        matches!(self, UploadStatus::Response(code) if (200..300).contains(code))
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStatus::Response(code) => write!(f, "HTTP {}", code),
            UploadStatus::Failed(reason) => write!(f, "upload failed ({})", reason),
        }
    }
}

/// A destination for encoded artworks.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `body` under `key` (e.g. `artworks/<id>.png`).
    ///
    /// Never fails: transport problems are reported in the status.
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> UploadStatus;
}

/// Object key for an artwork: `{bucket}/{identifier}.png`.
pub fn object_key(bucket: &str, identifier: &str) -> String {
    format!("{}/{}.png", bucket.trim_matches('/'), identifier)
}

/// Full URL for an object key under `base_url`.
pub fn object_url(base_url: &str, key: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key() {
        assert_eq!(
            object_key("artworks", "b0000001-0000-0000-0000-000000000001"),
            "artworks/b0000001-0000-0000-0000-000000000001.png"
        );
        assert_eq!(object_key("/artworks/", "x"), "artworks/x.png");
    }

    #[test]
    fn test_object_url() {
        let key = object_key(DEFAULT_BUCKET, "b0000001-0000-0000-0000-000000000001");
        assert_eq!(
            object_url("http://host:9000", &key),
            "http://host:9000/artworks/b0000001-0000-0000-0000-000000000001.png"
        );
        assert_eq!(object_url("http://host:9000/", "a/b.png"), "http://host:9000/a/b.png");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(UploadStatus::Response(200).to_string(), "HTTP 200");
        assert_eq!(
            UploadStatus::Failed("connection refused".to_string()).to_string(),
            "upload failed (connection refused)"
        );
    }

    #[test]
    fn test_status_success() {
        assert!(UploadStatus::Response(200).is_success());
        assert!(UploadStatus::Response(204).is_success());
        assert!(!UploadStatus::Response(403).is_success());
        assert!(!UploadStatus::Failed(String::new()).is_success());
    }
}
