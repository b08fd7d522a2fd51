//! End-to-end post lifecycle against the in-memory stores.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use folio_core::{DomainError, RepoError};
use folio_core::content::{strip_tags, word_count};
use folio_core::domain::{
    FeaturedImage, OpenGraph, PostInput, PostStatus, RedirectRule, RobotsInput, SeoInput,
};
use folio_core::ports::{Cache, RedirectRepository, SinkError, SitemapSink};
use folio_core::services::{PostService, RedirectResolver, SitemapBuilder, SitemapService};
use folio_infra::{
    CacheSitemapSink, InMemoryCache, InMemoryPostRepository, InMemoryRedirectRepository,
    InMemoryVersionRepository, SITEMAP_CACHE_KEY, UnconfiguredStore,
};

struct Harness {
    posts: PostService,
    resolver: RedirectResolver,
    redirects: Arc<InMemoryRedirectRepository>,
    cache: Arc<InMemoryCache>,
}

impl Harness {
    fn new() -> Self {
        Self::with_sinks(Vec::new())
    }

    fn with_sinks(mut sinks: Vec<Arc<dyn SitemapSink>>) -> Self {
        let store = Arc::new(InMemoryPostRepository::new());
        let versions = Arc::new(InMemoryVersionRepository::new());
        let redirects = Arc::new(InMemoryRedirectRepository::new());
        let cache = Arc::new(InMemoryCache::new());

        sinks.push(Arc::new(CacheSitemapSink::new(cache.clone())));
        let sitemap = Arc::new(SitemapService::new(
            store.clone(),
            SitemapBuilder::new("https://agency.example"),
            sinks,
        ));

        Self {
            posts: PostService::new(store, versions, redirects.clone(), sitemap),
            resolver: RedirectResolver::new(redirects.clone()),
            redirects,
            cache,
        }
    }

    async fn sitemap(&self) -> String {
        self.cache.get(SITEMAP_CACHE_KEY).await.unwrap_or_default()
    }
}

struct BrokenSink;

#[async_trait]
impl SitemapSink for BrokenSink {
    async fn publish(&self, _xml: &str) -> Result<(), SinkError> {
        Err(SinkError {
            target: "broken".to_string(),
            message: "disk full".to_string(),
        })
    }
}

struct RejectingRedirects;

#[async_trait]
impl RedirectRepository for RejectingRedirects {
    async fn append(&self, _rule: RedirectRule) -> Result<RedirectRule, RepoError> {
        Err(RepoError::Query("redirect log is read-only".to_string()))
    }

    async fn latest_from(&self, _slug: &str) -> Result<Option<RedirectRule>, RepoError> {
        Ok(None)
    }

    async fn list_for_post(&self, _post_id: Uuid) -> Result<Vec<RedirectRule>, RepoError> {
        Ok(Vec::new())
    }
}

fn input(title: &str, status: &str) -> PostInput {
    PostInput {
        title: Some(title.to_string()),
        excerpt: Some("A practical walkthrough of the topic for busy marketing teams.".into()),
        content_html: Some(format!(
            "<h2>Why it matters</h2><p>{}</p><h3>Details</h3><p>{}</p>",
            "Search visibility compounds over time. ".repeat(4),
            "Measure, iterate and publish. ".repeat(4)
        )),
        featured_image: Some(FeaturedImage::new(
            "https://cdn.example.com/hero.webp",
            "Team reviewing analytics",
        )),
        category: Some("SEO".into()),
        tags: Some(
            ["seo", "content", "growth", "analytics", "strategy"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        ),
        status: Some(status.to_string()),
        schema_type: Some("BlogPosting".into()),
        seo: Some(SeoInput {
            seo_title: Some(format!("{title} | Agency")),
            meta_description: Some(
                "Learn how structured content and steady publishing improve organic reach for growing brands."
                    .into(),
            ),
            focus_keyword: Some("organic growth".into()),
            robots: Some(RobotsInput::default()),
            open_graph: Some(OpenGraph {
                title: title.to_string(),
                description: "Structured content for organic growth.".into(),
                image: None,
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn slug_patch(slug: &str) -> PostInput {
    PostInput {
        slug: Some(slug.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_assigns_slug_version_and_first_snapshot() {
    let h = Harness::new();
    let source = input("Hello World", "draft");
    let html = source.content_html.clone().unwrap();

    let post = h.posts.create(source).await.unwrap();

    assert_eq!(post.slug, "hello-world");
    assert_eq!(post.version, 1);
    assert_eq!(post.tags.len(), 5);
    assert_eq!(post.word_count, word_count(&strip_tags(&html)));
    assert_eq!(post.created_at, post.updated_at);

    let versions = h.posts.versions(post.id).await.unwrap();
    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0].version, 1);
}

#[tokio::test]
async fn slug_change_records_redirect_and_updates_sitemap() {
    let h = Harness::new();
    let post = h.posts.create(input("Hello World", "published")).await.unwrap();
    assert!(h.sitemap().await.contains("<loc>https://agency.example/blog/hello-world</loc>"));

    let updated = h.posts.update(post.id, slug_patch("hello-world-2")).await.unwrap();

    assert_eq!(updated.slug, "hello-world-2");
    assert_eq!(updated.redirect_from, vec!["hello-world"]);
    assert_eq!(updated.version, 2);
    assert_eq!(updated.created_at, post.created_at);

    let sitemap = h.sitemap().await;
    assert!(sitemap.contains("<loc>https://agency.example/blog/hello-world-2</loc>"));
    assert!(!sitemap.contains("/blog/hello-world</loc>"));

    let target = h.resolver.resolve("hello-world").await.unwrap();
    assert_eq!(target.as_deref(), Some("hello-world-2"));
}

#[tokio::test]
async fn redirect_resolution_is_single_hop() {
    let h = Harness::new();
    let post = h.posts.create(input("Chained post", "draft")).await.unwrap();
    let first = post.slug.clone();

    h.posts.update(post.id, slug_patch("second-slug")).await.unwrap();
    let last = h.posts.update(post.id, slug_patch("third-slug")).await.unwrap();

    assert_eq!(last.redirect_from, vec![first.clone(), "second-slug".to_string()]);
    assert_eq!(h.redirects.list_for_post(post.id).await.unwrap().len(), 2);

    let from_first = h.resolver.resolve(&first).await.unwrap();
    assert_eq!(from_first.as_deref(), Some("second-slug"));
    let from_second = h.resolver.resolve("second-slug").await.unwrap();
    assert_eq!(from_second.as_deref(), Some("third-slug"));
}

#[tokio::test]
async fn reverting_a_slug_follows_the_latest_rule() {
    let h = Harness::new();
    let post = h.posts.create(input("Revert me", "draft")).await.unwrap();

    h.posts.update(post.id, slug_patch("slug-b")).await.unwrap();
    h.posts.update(post.id, slug_patch("revert-me")).await.unwrap();
    let last = h.posts.update(post.id, slug_patch("slug-c")).await.unwrap();

    assert_eq!(last.redirect_from, vec!["revert-me", "slug-b"]);
    let from_a = h.resolver.resolve("revert-me").await.unwrap();
    assert_eq!(from_a.as_deref(), Some("slug-c"));
    let from_b = h.resolver.resolve("slug-b").await.unwrap();
    assert_eq!(from_b.as_deref(), Some("revert-me"));
}

#[tokio::test]
async fn each_update_adds_exactly_one_snapshot() {
    let h = Harness::new();
    let post = h.posts.create(input("Versioned post", "draft")).await.unwrap();

    let mut latest = post.clone();
    for n in 1..=3 {
        let patch = PostInput {
            title: Some(format!("Versioned post {n}")),
            ..Default::default()
        };
        latest = h.posts.update(post.id, patch).await.unwrap();
    }

    assert_eq!(latest.version, 4);
    let versions: Vec<i32> = h
        .posts
        .versions(post.id)
        .await
        .unwrap()
        .iter()
        .map(|v| v.version)
        .collect();
    assert_eq!(versions, vec![3, 2, 1]);
}

#[tokio::test]
async fn rejected_update_leaves_no_trace() {
    let h = Harness::new();
    let post = h.posts.create(input("Stable post", "draft")).await.unwrap();

    let patch = PostInput {
        title: Some("  ".into()),
        ..Default::default()
    };
    let err = h.posts.update(post.id, patch).await.unwrap_err();

    let DomainError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert!(errors.contains_key("title"));

    let stored = h.posts.get(post.id).await.unwrap().unwrap();
    assert_eq!(stored.version, 1);
    assert_eq!(stored.title, "Stable post");
    assert_eq!(h.posts.versions(post.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_of_missing_post_is_not_found() {
    let h = Harness::new();
    let err = h.posts.update(Uuid::new_v4(), slug_patch("ghost-post")).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn duplicate_creates_fresh_draft() {
    let h = Harness::new();
    let post = h.posts.create(input("Original post", "published")).await.unwrap();
    let post = h.posts.update(post.id, slug_patch("original-post-2")).await.unwrap();
    assert!(!post.redirect_from.is_empty());

    let copy = h.posts.duplicate(post.id).await.unwrap();

    assert_ne!(copy.id, post.id);
    assert_eq!(copy.status, PostStatus::Draft);
    assert!(copy.slug.ends_with("-copy"));
    assert!(copy.redirect_from.is_empty());
    assert_eq!(copy.version, 1);
    assert!(!h.sitemap().await.contains(&copy.slug));

    let second = h.posts.duplicate(post.id).await.unwrap();
    assert_eq!(copy.slug, "original-post-2-copy");
    assert_eq!(second.slug, "original-post-2-copy-2");
    let found = h.posts.get_by_slug("original-post-2-copy-2").await.unwrap().unwrap();
    assert_eq!(found.id, second.id);
}

#[tokio::test]
async fn scheduled_posts_stay_hidden() {
    let h = Harness::new();
    let mut scheduled = input("Scheduled post", "published");
    scheduled.publish_date = Some(Utc::now() + Duration::days(3));
    h.posts.create(scheduled).await.unwrap();
    h.posts.create(input("Live post", "published")).await.unwrap();

    let live: Vec<String> = h
        .posts
        .list_published()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.slug)
        .collect();
    assert_eq!(live, vec!["live-post"]);

    let sitemap = h.sitemap().await;
    assert!(sitemap.contains("/blog/live-post</loc>"));
    assert!(!sitemap.contains("scheduled-post"));
}

#[tokio::test]
async fn restore_reapplies_snapshot_as_new_version() {
    let h = Harness::new();
    let post = h.posts.create(input("First title", "draft")).await.unwrap();
    h.posts
        .update(
            post.id,
            PostInput {
                title: Some("Second title".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let restored = h.posts.restore(post.id, 1).await.unwrap();

    assert_eq!(restored.title, "First title");
    assert_eq!(restored.version, 3);

    let missing = h.posts.restore(post.id, 42).await.unwrap_err();
    assert!(matches!(missing, DomainError::NotFound { entity_type: "Version", .. }));
}

#[tokio::test]
async fn related_posts_share_category() {
    let h = Harness::new();
    let target = h.posts.create(input("Target post", "published")).await.unwrap();
    for title in ["Sibling one", "Sibling two", "Sibling three", "Sibling four"] {
        h.posts.create(input(title, "published")).await.unwrap();
    }
    let mut other = input("Other category", "published");
    other.category = Some("PPC".into());
    h.posts.create(other).await.unwrap();

    let related = h.posts.related(&target.slug).await.unwrap();

    assert_eq!(related.len(), 3);
    assert!(related.iter().all(|p| p.id != target.id && p.category == target.category));
}

#[tokio::test]
async fn delete_removes_post_and_keeps_history() {
    let h = Harness::new();
    let post = h.posts.create(input("Short lived", "published")).await.unwrap();

    h.posts.delete(post.id).await.unwrap();

    assert!(h.posts.get(post.id).await.unwrap().is_none());
    assert!(!h.sitemap().await.contains("short-lived"));
    assert_eq!(h.posts.versions(post.id).await.unwrap().len(), 1);
    assert!(matches!(
        h.posts.delete(post.id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn sitemap_failure_does_not_fail_the_write() {
    let h = Harness::with_sinks(vec![Arc::new(BrokenSink)]);

    let post = h.posts.create(input("Resilient post", "published")).await.unwrap();

    assert_eq!(post.version, 1);
    assert!(h.posts.get(post.id).await.unwrap().is_some());
}

#[tokio::test]
async fn unavailable_store_degrades_reads_and_rejects_writes() {
    let store = Arc::new(UnconfiguredStore);
    let sitemap = Arc::new(SitemapService::new(
        store.clone(),
        SitemapBuilder::new("https://agency.example"),
        Vec::new(),
    ));
    let posts = PostService::new(store.clone(), store.clone(), store.clone(), sitemap);
    let resolver = RedirectResolver::new(store);

    assert!(posts.list_published().await.unwrap().is_empty());
    assert!(posts.get_by_slug("hello-world").await.unwrap().is_none());
    assert!(resolver.resolve("hello-world").await.unwrap().is_none());

    let err = posts.create(input("Hello World", "draft")).await.unwrap_err();
    assert!(matches!(err, DomainError::StoreUnavailable(_)));
}

#[tokio::test]
async fn failed_redirect_write_keeps_the_old_slug() {
    let store = Arc::new(InMemoryPostRepository::new());
    let cache = Arc::new(InMemoryCache::new());
    let sitemap = Arc::new(SitemapService::new(
        store.clone(),
        SitemapBuilder::new("https://agency.example"),
        vec![Arc::new(CacheSitemapSink::new(cache.clone()))],
    ));
    let posts = PostService::new(
        store,
        Arc::new(InMemoryVersionRepository::new()),
        Arc::new(RejectingRedirects),
        sitemap,
    );

    let post = posts.create(input("Hello World", "published")).await.unwrap();
    assert!(posts.update(post.id, slug_patch("hello-world-2")).await.is_err());

    let stored = posts.get(post.id).await.unwrap().unwrap();
    assert_eq!(stored.slug, "hello-world");
    assert_eq!(stored.version, 1);
    assert!(stored.redirect_from.is_empty());

    let xml = cache.get(SITEMAP_CACHE_KEY).await.unwrap_or_default();
    assert!(xml.contains("<loc>https://agency.example/blog/hello-world</loc>"));
    assert!(!xml.contains("hello-world-2"));
}
