//! Editable post payload as submitted by an editing client.
//!
//! Every field is optional so the same shape serves creation and partial
//! updates. Enumerated values stay as raw strings until validation so an
//! unknown value becomes a field error instead of a decode failure.

use chrono::{DateTime, Utc};

use super::post::{FeaturedImage, OpenGraph, Post, RobotsFollow, RobotsIndex, SeoMeta};

#[derive(Debug, Clone, PartialEq)]
pub struct RobotsInput {
    pub index: String,
    pub follow: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeoInput {
    pub seo_title: Option<String>,
    pub meta_description: Option<String>,
    pub focus_keyword: Option<String>,
    pub secondary_keywords: Vec<String>,
    pub canonical_url: Option<String>,
    pub robots: Option<RobotsInput>,
    pub open_graph: Option<OpenGraph>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostInput {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub override_slug: Option<String>,
    pub excerpt: Option<String>,
    pub content_html: Option<String>,
    pub featured_image: Option<FeaturedImage>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
    pub author_id: Option<String>,
    pub schema_type: Option<String>,
    pub table_of_contents_enabled: Option<bool>,
    pub seo: Option<SeoInput>,
    pub internal_links: Option<Vec<String>>,
    pub publish_date: Option<DateTime<Utc>>,
}

impl PostInput {
    /// Overlay `patch` on top of `self`; fields present in the patch win.
    pub fn merge(self, patch: PostInput) -> PostInput {
        PostInput {
            title: patch.title.or(self.title),
            slug: patch.slug.or(self.slug),
            override_slug: patch.override_slug.or(self.override_slug),
            excerpt: patch.excerpt.or(self.excerpt),
            content_html: patch.content_html.or(self.content_html),
            featured_image: patch.featured_image.or(self.featured_image),
            category: patch.category.or(self.category),
            tags: patch.tags.or(self.tags),
            status: patch.status.or(self.status),
            author_id: patch.author_id.or(self.author_id),
            schema_type: patch.schema_type.or(self.schema_type),
            table_of_contents_enabled: patch
                .table_of_contents_enabled
                .or(self.table_of_contents_enabled),
            seo: patch.seo.or(self.seo),
            internal_links: patch.internal_links.or(self.internal_links),
            publish_date: patch.publish_date.or(self.publish_date),
        }
    }

    /// Fill editorial defaults: draft status, `BlogPosting` schema, and an
    /// SEO block derived from title and excerpt when none was supplied.
    pub fn with_defaults(mut self) -> PostInput {
        self.status.get_or_insert_with(|| "draft".to_string());
        self.schema_type
            .get_or_insert_with(|| "BlogPosting".to_string());

        if self.seo.is_none() {
            let title = self.title.clone().unwrap_or_default();
            let excerpt = self.excerpt.clone().unwrap_or_default();
            self.seo = Some(SeoInput {
                seo_title: Some(title.clone()),
                meta_description: Some(excerpt.clone()),
                robots: Some(RobotsInput::default()),
                open_graph: Some(OpenGraph {
                    title,
                    description: excerpt,
                    image: None,
                }),
                ..Default::default()
            });
        }

        if let Some(seo) = self.seo.as_mut() {
            seo.robots.get_or_insert_with(RobotsInput::default);
        }
        self
    }
}

impl Default for RobotsInput {
    fn default() -> Self {
        Self {
            index: "index".to_string(),
            follow: "follow".to_string(),
        }
    }
}

impl From<&SeoMeta> for SeoInput {
    fn from(seo: &SeoMeta) -> Self {
        let index = match seo.robots.index {
            RobotsIndex::Index => "index",
            RobotsIndex::NoIndex => "noindex",
        };
        let follow = match seo.robots.follow {
            RobotsFollow::Follow => "follow",
            RobotsFollow::NoFollow => "nofollow",
        };
        SeoInput {
            seo_title: Some(seo.seo_title.clone()),
            meta_description: Some(seo.meta_description.clone()),
            focus_keyword: Some(seo.focus_keyword.clone()),
            secondary_keywords: seo.secondary_keywords.clone(),
            canonical_url: seo.canonical_url.clone(),
            robots: Some(RobotsInput {
                index: index.to_string(),
                follow: follow.to_string(),
            }),
            open_graph: Some(seo.open_graph.clone()),
        }
    }
}

/// The editable part of a stored post, used as the base of an update.
impl From<&Post> for PostInput {
    fn from(post: &Post) -> Self {
        PostInput {
            title: Some(post.title.clone()),
            slug: Some(post.slug.clone()),
            override_slug: None,
            excerpt: Some(post.excerpt.clone()),
            content_html: Some(post.content_html.clone()),
            featured_image: Some(post.featured_image.clone()),
            category: Some(post.category.clone()),
            tags: Some(post.tags.clone()),
            status: Some(post.status.as_str().to_string()),
            author_id: post.author_id.clone(),
            schema_type: Some(post.schema_type.as_str().to_string()),
            table_of_contents_enabled: Some(post.table_of_contents_enabled),
            seo: Some(SeoInput::from(&post.seo)),
            internal_links: Some(post.internal_links.clone()),
            publish_date: post.publish_date,
        }
    }
}
