//! Sitemap sink port - where rebuilt sitemap documents are published.

use async_trait::async_trait;

#[async_trait]
pub trait SitemapSink: Send + Sync {
    /// Publish a complete sitemap document, replacing the previous one.
    async fn publish(&self, xml: &str) -> Result<(), SinkError>;
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to publish sitemap to {target}: {message}")]
pub struct SinkError {
    pub target: String,
    pub message: String,
}
