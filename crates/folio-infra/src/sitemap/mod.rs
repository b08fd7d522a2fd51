//! Sitemap sinks.
//!
//! A rebuilt sitemap is written to disk for static hosting and kept in the
//! cache so `GET /sitemap.xml` never touches the post store.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use folio_core::ports::{Cache, SinkError, SitemapSink};

/// Cache key under which the current sitemap document is held.
pub const SITEMAP_CACHE_KEY: &str = "sitemap.xml";

/// Writes the sitemap to a file, replacing it atomically.
pub struct FileSitemapSink {
    path: PathBuf,
}

impl FileSitemapSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn error(&self, err: impl ToString) -> SinkError {
        SinkError {
            target: self.path.display().to_string(),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl SitemapSink for FileSitemapSink {
    async fn publish(&self, xml: &str) -> Result<(), SinkError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.error(e))?;
        }

        // Readers only ever see a complete document.
        let staging = self.path.with_extension("xml.tmp");
        tokio::fs::write(&staging, xml)
            .await
            .map_err(|e| self.error(e))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| self.error(e))?;

        tracing::debug!(path = %self.path.display(), bytes = xml.len(), "Sitemap written");
        Ok(())
    }
}

/// Stores the sitemap in a [`Cache`] under [`SITEMAP_CACHE_KEY`].
pub struct CacheSitemapSink {
    cache: Arc<dyn Cache>,
}

impl CacheSitemapSink {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl SitemapSink for CacheSitemapSink {
    async fn publish(&self, xml: &str) -> Result<(), SinkError> {
        self.cache
            .set(SITEMAP_CACHE_KEY, xml, None)
            .await
            .map_err(|e| SinkError {
                target: "cache".to_string(),
                message: e.to_string(),
            })
    }
}
