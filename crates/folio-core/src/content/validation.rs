//! Publishing constraints for post payloads.
//!
//! Every rule is checked independently and all failures are collected, so an
//! editing client can highlight each invalid field at once.

use chrono::{DateTime, Utc};
use url::Url;

use super::derive::sanitize_tags;
use super::slug::{slug_candidate, slugify};
use crate::domain::{
    FeaturedImage, OpenGraph, PostInput, PostStatus, Robots, RobotsFollow, RobotsIndex,
    SchemaType, SeoMeta,
};
use crate::error::{DomainError, FieldErrors};

pub const MIN_TITLE: usize = 4;
pub const MIN_SLUG: usize = 3;
pub const MIN_CONTENT: usize = 120;
pub const MIN_TAGS: usize = 4;
pub const MAX_TAGS: usize = 8;
pub const MIN_EXCERPT: usize = 40;
pub const MAX_EXCERPT: usize = 260;
pub const MAX_SEO_TITLE: usize = 70;
pub const MIN_META_DESCRIPTION: usize = 70;
pub const MAX_META_DESCRIPTION: usize = 160;
pub const MAX_INTERNAL_LINKS: usize = 5;

/// Outcome of [`validate`]. `sanitized` carries the normalized slug and tags
/// even when validation fails, so the slug can be previewed.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: FieldErrors,
    pub sanitized: PostInput,
}

/// Typed, fully validated post fields ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPost {
    pub title: String,
    pub slug: String,
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
    pub publish_date: Option<DateTime<Utc>>,
}

fn chars(s: &str) -> usize {
    s.chars().count()
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

pub fn validate(input: &PostInput) -> ValidationReport {
    let mut errors = FieldErrors::new();
    let mut fail = |field: &str, message: String| {
        errors.insert(field.to_string(), message);
    };

    if chars(text(&input.title).trim()) < MIN_TITLE {
        fail(
            "title",
            format!("Title is required and should be at least {MIN_TITLE} characters."),
        );
    }

    let candidate = slug_candidate(
        input.override_slug.as_deref(),
        input.slug.as_deref(),
        input.title.as_deref(),
    );
    let slug = candidate.map(slugify).unwrap_or_default();
    if candidate.is_none() {
        fail("slug", "Slug is required.".into());
    } else if slug.len() < MIN_SLUG {
        fail("slug", format!("Slug must be at least {MIN_SLUG} characters."));
    }

    // Measured on the HTML string as stored, markup and whitespace included.
    if chars(text(&input.content_html)) < MIN_CONTENT {
        fail(
            "contentHtml",
            format!("Content must be at least {MIN_CONTENT} characters."),
        );
    }

    let image = input.featured_image.as_ref();
    if image.is_none_or(|i| i.url.trim().is_empty()) {
        fail("featuredImage", "Featured image URL is required.".into());
    }
    if image.is_none_or(|i| i.alt.trim().is_empty()) {
        fail("featuredImageAlt", "Featured image alt text is required.".into());
    }

    if text(&input.category).trim().is_empty() {
        fail("category", "Primary category is required.".into());
    }

    let tags = input.tags.as_deref().map(sanitize_tags).unwrap_or_default();
    if !(MIN_TAGS..=MAX_TAGS).contains(&tags.len()) {
        fail(
            "tags",
            format!("Please provide between {MIN_TAGS} and {MAX_TAGS} tags."),
        );
    }

    let excerpt = chars(text(&input.excerpt));
    if !(MIN_EXCERPT..=MAX_EXCERPT).contains(&excerpt) {
        fail(
            "excerpt",
            format!("Excerpt must be {MIN_EXCERPT}-{MAX_EXCERPT} characters."),
        );
    }

    let seo = input.seo.as_ref();
    let seo_title = seo.map(|s| text(&s.seo_title)).unwrap_or_default();
    if seo_title.trim().is_empty() || chars(seo_title) > MAX_SEO_TITLE {
        fail(
            "seoTitle",
            format!("SEO title is required and cannot exceed {MAX_SEO_TITLE} characters."),
        );
    }

    let meta = chars(seo.map(|s| text(&s.meta_description)).unwrap_or_default());
    if !(MIN_META_DESCRIPTION..=MAX_META_DESCRIPTION).contains(&meta) {
        fail(
            "metaDescription",
            format!(
                "Meta description must be {MIN_META_DESCRIPTION}-{MAX_META_DESCRIPTION} characters."
            ),
        );
    }

    if let Some(seo) = seo {
        let robots = seo.robots.as_ref();
        if robots.is_none_or(|r| r.index.parse::<RobotsIndex>().is_err()) {
            fail(
                "robotsIndex",
                "Robots index must be either index or noindex.".into(),
            );
        }
        if robots.is_none_or(|r| r.follow.parse::<RobotsFollow>().is_err()) {
            fail(
                "robotsFollow",
                "Robots follow must be either follow or nofollow.".into(),
            );
        }

        if let Some(canonical) = seo.canonical_url.as_deref().filter(|c| !c.is_empty()) {
            if Url::parse(canonical).is_err() {
                fail("canonicalUrl", "Canonical URL must be a valid URL.".into());
            }
        }

        let og = seo.open_graph.as_ref();
        if og
            .and_then(|og| og.image.as_ref())
            .is_some_and(|image| image.alt.trim().is_empty())
        {
            fail("ogAlt", "Open Graph image must include alt text.".into());
        }

        if input.status.as_deref() == Some(PostStatus::Published.as_str()) {
            if og.is_none_or(|og| og.title.trim().is_empty()) {
                fail(
                    "ogTitle",
                    "Open Graph title is required before publishing.".into(),
                );
            }
            if og.is_none_or(|og| og.description.trim().is_empty()) {
                fail(
                    "ogDescription",
                    "Open Graph description is required before publishing.".into(),
                );
            }
        }
    }

    if input
        .status
        .as_deref()
        .is_none_or(|s| s.parse::<PostStatus>().is_err())
    {
        fail("status", "Post status is invalid.".into());
    }

    if input
        .schema_type
        .as_deref()
        .is_none_or(|s| s.parse::<SchemaType>().is_err())
    {
        fail("schemaType", "Schema type is invalid.".into());
    }

    if input
        .internal_links
        .as_ref()
        .is_some_and(|links| links.len() > MAX_INTERNAL_LINKS)
    {
        fail(
            "internalLinks",
            format!("Limit internal links to {MAX_INTERNAL_LINKS} suggestions."),
        );
    }

    let mut sanitized = input.clone();
    sanitized.slug = Some(slug);
    sanitized.override_slug = None;
    if input.tags.is_some() {
        sanitized.tags = Some(tags);
    }

    ValidationReport { errors, sanitized }
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into typed fields, or fail with the full error map.
    pub fn into_validated(self) -> Result<ValidatedPost, DomainError> {
        if !self.is_valid() {
            return Err(DomainError::Validation(self.errors));
        }

        let input = self.sanitized;
        let seo = input.seo.unwrap_or_default();
        let robots = seo.robots.unwrap_or_default();

        Ok(ValidatedPost {
            title: input.title.unwrap_or_default().trim().to_string(),
            slug: input.slug.unwrap_or_default(),
            excerpt: input.excerpt.unwrap_or_default(),
            content_html: input.content_html.unwrap_or_default(),
            featured_image: input.featured_image.unwrap_or_default(),
            category: input.category.unwrap_or_default().trim().to_string(),
            tags: input.tags.unwrap_or_default(),
            status: parse_field("status", input.status.as_deref())?,
            author_id: input.author_id.filter(|a| !a.is_empty()),
            schema_type: parse_field("schemaType", input.schema_type.as_deref())?,
            table_of_contents_enabled: input.table_of_contents_enabled.unwrap_or(true),
            seo: SeoMeta {
                seo_title: seo.seo_title.unwrap_or_default(),
                meta_description: seo.meta_description.unwrap_or_default(),
                focus_keyword: seo.focus_keyword.unwrap_or_default(),
                secondary_keywords: seo.secondary_keywords,
                canonical_url: seo.canonical_url.filter(|c| !c.is_empty()),
                robots: Robots {
                    index: parse_field("robotsIndex", Some(robots.index.as_str()))?,
                    follow: parse_field("robotsFollow", Some(robots.follow.as_str()))?,
                },
                open_graph: seo.open_graph.unwrap_or_else(OpenGraph::default),
            },
            internal_links: input.internal_links.unwrap_or_default(),
            publish_date: input.publish_date,
        })
    }
}

fn parse_field<T>(field: &str, value: Option<&str>) -> Result<T, DomainError>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .unwrap_or_default()
        .parse()
        .map_err(|message| DomainError::invalid(field, message))
}


#[cfg(test)]
mod tests {
    use super::fixtures::valid_input;
    use super::*;
    use crate::domain::{RobotsInput, SeoInput};

    #[test]
    fn valid_input_passes() {
        let report = validate(&valid_input("Hello World"));
        assert!(report.is_valid(), "{:?}", report.errors);
        assert_eq!(report.sanitized.slug.as_deref(), Some("hello-world"));
    }

    #[test]
    fn tag_bounds_are_inclusive() {
        for count in [4, 8] {
            let mut input = valid_input("Hello World");
            input.tags = Some((0..count).map(|i| format!("tag{i}")).collect());
            assert!(validate(&input).is_valid(), "{count} tags");
        }
        for count in [3, 9] {
            let mut input = valid_input("Hello World");
            input.tags = Some((0..count).map(|i| format!("tag{i}")).collect());
            assert!(validate(&input).errors.contains_key("tags"), "{count} tags");
        }
    }

    #[test]
    fn content_length_counts_the_raw_html() {
        let mut input = valid_input("Hello World");
        let body = "a".repeat(MIN_CONTENT - 7);
        input.content_html = Some(format!("<p>{body}</p>"));
        assert!(validate(&input).errors.get("contentHtml").is_none());

        input.content_html = Some(format!("  <p>{}</p>", "a".repeat(MIN_CONTENT - 9)));
        assert!(validate(&input).errors.get("contentHtml").is_none());

        input.content_html = Some(format!("<p>{}</p>", "a".repeat(MIN_CONTENT - 8)));
        assert!(validate(&input).errors.contains_key("contentHtml"));
    }

    #[test]
    fn duplicate_tags_count_once() {
        let mut input = valid_input("Hello World");
        input.tags = Some(vec!["a".into(), "A".into(), "b".into(), "c".into()]);
        assert!(validate(&input).errors.contains_key("tags"));
    }

    #[test]
    fn missing_alt_is_reported_alongside_other_errors() {
        let mut input = valid_input("Hello World");
        input.featured_image = Some(FeaturedImage::new("https://cdn.example.com/x.webp", ""));
        input.title = Some("Hi".into());
        input.excerpt = Some("short".into());

        let report = validate(&input);
        assert!(!report.is_valid());
        assert!(report.errors.contains_key("featuredImageAlt"));
        assert!(report.errors.contains_key("title"));
        assert!(report.errors.contains_key("excerpt"));
    }

    #[test]
    fn empty_input_collects_every_required_field() {
        let report = validate(&PostInput::default());
        for field in [
            "title",
            "slug",
            "contentHtml",
            "featuredImage",
            "featuredImageAlt",
            "category",
            "tags",
            "excerpt",
            "seoTitle",
            "metaDescription",
            "status",
            "schemaType",
        ] {
            assert!(report.errors.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn slug_preview_is_returned_on_failure() {
        let mut input = valid_input("Hello World");
        input.override_slug = Some("Custom Slug!".into());
        input.category = None;

        let report = validate(&input);
        assert!(!report.is_valid());
        assert_eq!(report.sanitized.slug.as_deref(), Some("custom-slug"));
    }

    #[test]
    fn short_slug_is_rejected() {
        let mut input = valid_input("Hello World");
        input.slug = Some("a!".into());
        assert!(validate(&input).errors.contains_key("slug"));
    }

    #[test]
    fn seo_lengths_are_enforced() {
        let mut input = valid_input("Hello World");
        input.seo = Some(SeoInput {
            seo_title: Some("x".repeat(71)),
            meta_description: Some("too short".into()),
            robots: Some(RobotsInput::default()),
            ..Default::default()
        });

        let report = validate(&input);
        assert!(report.errors.contains_key("seoTitle"));
        assert!(report.errors.contains_key("metaDescription"));
    }

    #[test]
    fn robots_and_canonical_are_checked() {
        let mut input = valid_input("Hello World");
        let seo = input.seo.as_mut().unwrap();
        seo.robots = Some(RobotsInput {
            index: "maybe".into(),
            follow: "nofollow".into(),
        });
        seo.canonical_url = Some("not a url".into());

        let report = validate(&input);
        assert!(report.errors.contains_key("robotsIndex"));
        assert!(!report.errors.contains_key("robotsFollow"));
        assert!(report.errors.contains_key("canonicalUrl"));
    }

    #[test]
    fn og_image_requires_alt() {
        let mut input = valid_input("Hello World");
        let og = input.seo.as_mut().unwrap().open_graph.as_mut().unwrap();
        og.image = Some(FeaturedImage::new("https://cdn.example.com/og.png", ""));
        assert!(validate(&input).errors.contains_key("ogAlt"));
    }

    #[test]
    fn publishing_requires_open_graph_copy() {
        let mut input = valid_input("Hello World");
        input.status = Some("published".into());
        input.seo.as_mut().unwrap().open_graph = None;

        let report = validate(&input);
        assert!(report.errors.contains_key("ogTitle"));
        assert!(report.errors.contains_key("ogDescription"));

        input.status = Some("draft".into());
        assert!(validate(&input).is_valid());
    }

    #[test]
    fn unknown_enums_are_field_errors() {
        let mut input = valid_input("Hello World");
        input.status = Some("Published".into());
        input.schema_type = Some("Recipe".into());

        let report = validate(&input);
        assert!(report.errors.contains_key("status"));
        assert!(report.errors.contains_key("schemaType"));
    }

    #[test]
    fn case_study_schema_is_accepted() {
        let mut input = valid_input("Hello World");
        input.schema_type = Some("CaseStudy".into());
        assert!(validate(&input).is_valid());
    }

    #[test]
    fn internal_links_are_capped() {
        let mut input = valid_input("Hello World");
        input.internal_links = Some((0..6).map(|i| format!("post-{i}")).collect());
        assert!(validate(&input).errors.contains_key("internalLinks"));
    }

    #[test]
    fn into_validated_returns_typed_fields() {
        let validated = validate(&valid_input("Hello World")).into_validated().unwrap();
        assert_eq!(validated.slug, "hello-world");
        assert_eq!(validated.status, PostStatus::Draft);
        assert_eq!(validated.schema_type, SchemaType::BlogPosting);
        assert_eq!(validated.seo.robots, Robots::default());
        assert!(validated.table_of_contents_enabled);
    }

    #[test]
    fn into_validated_carries_all_errors() {
        match validate(&PostInput::default()).into_validated() {
            Err(DomainError::Validation(errors)) => assert!(errors.len() > 5),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
