//! Sitemap generation.
//!
//! The sitemap is rebuilt in full from the live published posts after every
//! write and pushed to each configured sink.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/blog/hello-world</loc>
//!     <lastmod>2025-01-01T00:00:00Z</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.7</priority>
//!   </url>
//! </urlset>
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::{Post, PostStatus};
use crate::error::DomainError;
use crate::ports::{PostRepository, SitemapSink};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Site pages listed ahead of the posts.
const STATIC_PATHS: [&str; 2] = ["/", "/blog"];

/// Pure XML rendering of the sitemap.
#[derive(Debug, Clone)]
pub struct SitemapBuilder {
    site_url: String,
}

struct UrlEntry {
    loc: String,
    lastmod: DateTime<Utc>,
    changefreq: &'static str,
    priority: &'static str,
}

impl SitemapBuilder {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/blog/{}", self.site_url, slug)
    }

    /// Render a sitemap for the live posts among `posts`.
    pub fn build(&self, posts: &[Post], now: DateTime<Utc>) -> String {
        let newest = posts
            .iter()
            .filter(|p| p.is_live(now))
            .map(Post::last_modified)
            .max()
            .unwrap_or(now);

        let pages = STATIC_PATHS.iter().map(|path| UrlEntry {
            loc: format!("{}{}", self.site_url, path),
            lastmod: newest,
            changefreq: "daily",
            priority: "1.0",
        });
        let articles = posts.iter().filter(|p| p.is_live(now)).map(|post| UrlEntry {
            loc: self.post_url(&post.slug),
            lastmod: post.last_modified(),
            changefreq: "weekly",
            priority: "0.7",
        });

        let mut xml = String::with_capacity(4096);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in pages.chain(articles) {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&entry.lastmod.to_rfc3339_opts(SecondsFormat::Secs, true));
            xml.push_str("</lastmod>\n    <changefreq>");
            xml.push_str(entry.changefreq);
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(entry.priority);
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// `robots.txt` pointing crawlers at the sitemap.
    pub fn robots_txt(&self) -> String {
        format!(
            "User-agent: *\nAllow: /\nSitemap: {site}/sitemap.xml\nHost: {site}\n",
            site = self.site_url
        )
    }
}

/// Rebuilds the sitemap from the store and publishes it to every sink.
pub struct SitemapService {
    posts: Arc<dyn PostRepository>,
    builder: SitemapBuilder,
    sinks: Vec<Arc<dyn SitemapSink>>,
}

impl SitemapService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        builder: SitemapBuilder,
        sinks: Vec<Arc<dyn SitemapSink>>,
    ) -> Self {
        Self {
            posts,
            builder,
            sinks,
        }
    }

    pub fn builder(&self) -> &SitemapBuilder {
        &self.builder
    }

    /// Render the sitemap as of now without publishing it.
    pub async fn render(&self) -> Result<String, DomainError> {
        let posts = self.posts.list_by_status(PostStatus::Published).await?;
        Ok(self.builder.build(&posts, Utc::now()))
    }

    /// Full rebuild from the currently published posts.
    pub async fn rebuild(&self) -> Result<String, DomainError> {
        let xml = self.render().await?;

        for sink in &self.sinks {
            sink.publish(&xml)
                .await
                .map_err(|e| DomainError::Internal(e.to_string()))?;
        }

        tracing::debug!(sinks = self.sinks.len(), "Sitemap rebuilt");
        Ok(xml)
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
