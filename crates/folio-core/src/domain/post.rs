use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Editorial state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Scheduled,
    Published,
    Private,
}

impl PostStatus {
    pub const ALL: [PostStatus; 4] = [
        PostStatus::Draft,
        PostStatus::Scheduled,
        PostStatus::Published,
        PostStatus::Private,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Published => "published",
            PostStatus::Private => "private",
        }
    }
}

impl FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown post status '{s}'"))
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured-data type emitted for the post page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SchemaType {
    Article,
    #[default]
    BlogPosting,
    #[serde(rename = "FAQ")]
    Faq,
    HowTo,
    CaseStudy,
    Review,
}

impl SchemaType {
    pub const ALL: [SchemaType; 6] = [
        SchemaType::Article,
        SchemaType::BlogPosting,
        SchemaType::Faq,
        SchemaType::HowTo,
        SchemaType::CaseStudy,
        SchemaType::Review,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Article => "Article",
            SchemaType::BlogPosting => "BlogPosting",
            SchemaType::Faq => "FAQ",
            SchemaType::HowTo => "HowTo",
            SchemaType::CaseStudy => "CaseStudy",
            SchemaType::Review => "Review",
        }
    }
}

impl FromStr for SchemaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|schema| schema.as_str() == s)
            .ok_or_else(|| format!("unknown schema type '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotsIndex {
    #[default]
    Index,
    NoIndex,
}

impl FromStr for RobotsIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index" => Ok(RobotsIndex::Index),
            "noindex" => Ok(RobotsIndex::NoIndex),
            other => Err(format!("unknown robots index '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotsFollow {
    #[default]
    Follow,
    NoFollow,
}

impl FromStr for RobotsFollow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "follow" => Ok(RobotsFollow::Follow),
            "nofollow" => Ok(RobotsFollow::NoFollow),
            other => Err(format!("unknown robots follow '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Robots {
    pub index: RobotsIndex,
    pub follow: RobotsFollow,
}

/// Image reference with the alt text every published image must carry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedImage {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl FeaturedImage {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
            width: None,
            height: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<FeaturedImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMeta {
    pub seo_title: String,
    pub meta_description: String,
    #[serde(default)]
    pub focus_keyword: String,
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    pub robots: Robots,
    pub open_graph: OpenGraph,
}

/// One heading entry of the derived table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub id: String,
    pub label: String,
    pub level: u8,
}

/// Post entity - the canonical blog post document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content_html: String,
    pub featured_image: FeaturedImage,
    pub category: String,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub author_id: Option<String>,
    pub schema_type: SchemaType,
    pub table_of_contents_enabled: bool,
    pub seo: SeoMeta,
    pub internal_links: Vec<String>,
    pub redirect_from: Vec<String>,

    // Derived on every save.
    pub word_count: u32,
    pub reading_time: u32,
    pub table_of_contents: Vec<TocEntry>,
    pub search_index: Vec<String>,

    pub publish_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
}

impl Post {
    /// Published and not scheduled in the future.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.status == PostStatus::Published && self.publish_date.is_none_or(|date| date <= now)
    }

    /// Most recent of the three timestamps, used as the sitemap `lastmod`.
    pub fn last_modified(&self) -> DateTime<Utc> {
        [Some(self.updated_at), self.publish_date, Some(self.created_at)]
            .into_iter()
            .flatten()
            .max()
            .unwrap_or(self.updated_at)
    }

    /// Sort key for publication order; undated posts fall back to creation time.
    pub fn publication_date(&self) -> DateTime<Utc> {
        self.publish_date.unwrap_or(self.created_at)
    }
}

/// Listing filter for the editorial back office.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub status: Option<PostStatus>,
    pub category: Option<String>,
    pub author_id: Option<String>,
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        self.status.is_none_or(|status| post.status == status)
            && self.category.as_deref().is_none_or(|c| post.category == c)
            && self
                .author_id
                .as_deref()
                .is_none_or(|a| post.author_id.as_deref() == Some(a))
    }
}


#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::fixtures::post;
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in PostStatus::ALL {
            assert_eq!(status.as_str().parse::<PostStatus>(), Ok(status));
        }
        assert!("Published".parse::<PostStatus>().is_err());
    }

    #[test]
    fn faq_schema_uses_upper_case_name() {
        assert_eq!("FAQ".parse::<SchemaType>(), Ok(SchemaType::Faq));
        assert_eq!(serde_json::to_string(&SchemaType::Faq).unwrap(), "\"FAQ\"");
    }

    #[test]
    fn future_publish_date_is_not_live() {
        let now = Utc::now();
        let mut p = post("later", PostStatus::Published);
        p.publish_date = Some(now + Duration::days(1));
        assert!(!p.is_live(now));

        p.publish_date = Some(now - Duration::days(1));
        assert!(p.is_live(now));
    }

    #[test]
    fn last_modified_picks_most_recent_timestamp() {
        let mut p = post("a", PostStatus::Published);
        let later = p.updated_at + Duration::hours(3);
        p.publish_date = Some(later);
        assert_eq!(p.last_modified(), later);
    }

    #[test]
    fn filter_matches_on_every_field() {
        let mut p = post("a", PostStatus::Draft);
        p.author_id = Some("ana".into());

        let filter = PostFilter {
            status: Some(PostStatus::Draft),
            category: Some("seo".into()),
            author_id: Some("ana".into()),
        };
        assert!(filter.matches(&p));

        let other_author = PostFilter {
            author_id: Some("bo".into()),
            ..Default::default()
        };
        assert!(!other_author.matches(&p));
    }
}
