//! Data Transfer Objects - request/response types for the API.
//!
//! Editing clients have shipped several payload shapes over time, so the
//! post payload accepts the older field names as aliases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Create or update request for a post. Every field is optional; on update
/// only the supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub title: Option<String>,
    pub slug: Option<String>,
    /// Explicit slug chosen by the editor; wins over `slug` and the title.
    pub override_slug: Option<String>,
    pub excerpt: Option<String>,
    #[serde(alias = "content")]
    pub content_html: Option<String>,
    pub featured_image: Option<ImagePayload>,
    /// Flat image fields used by older clients.
    pub featured_image_url: Option<String>,
    pub featured_image_alt: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
    pub author_id: Option<String>,
    pub schema_type: Option<String>,
    #[serde(alias = "tocEnabled")]
    pub table_of_contents_enabled: Option<bool>,
    pub seo: Option<SeoPayload>,
    pub internal_links: Option<Vec<String>>,
    #[serde(alias = "publishedAt")]
    pub publish_date: Option<DateTime<Utc>>,
}

/// A featured image given either as a bare URL or as a full object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImagePayload {
    Url(String),
    Full(ImageDto),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoPayload {
    pub seo_title: Option<String>,
    pub meta_description: Option<String>,
    pub focus_keyword: Option<String>,
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
    pub canonical_url: Option<String>,
    pub robots: Option<RobotsPayload>,
    #[serde(alias = "og")]
    pub open_graph: Option<OpenGraphPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotsPayload {
    #[serde(default = "default_index")]
    pub index: String,
    #[serde(default = "default_follow")]
    pub follow: String,
}

fn default_index() -> String {
    "index".to_string()
}

fn default_follow() -> String {
    "follow".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenGraphPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image: Option<ImagePayload>,
}

/// Query string for `GET /api/posts`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub author_id: Option<String>,
}

/// Query string for `GET /api/internal-links`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalLinksQuery {
    pub q: Option<String>,
    /// Id of the post being edited, left out of the suggestions.
    pub exclude: Option<String>,
}

/// Query string for `GET /api/redirect`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedirectQuery {
    pub slug: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectResponse {
    pub destination: Option<String>,
}

/// Query string for `GET /api/media` and `POST /api/media`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaQuery {
    #[serde(alias = "blogId")]
    pub post_id: String,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaUploadResponse {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    /// Full object key, `blogs/{postId}/media/{filename}`.
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub ok: bool,
    pub id: String,
}
