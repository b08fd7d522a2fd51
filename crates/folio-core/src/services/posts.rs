//! Post lifecycle: the create/update pipeline tying validation, derivation,
//! versioning, redirects and sitemap synchronization together.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::content::{SlugChange, ValidatedPost, derive_fields, sanitize_content_html, validate};
use crate::domain::{Post, PostFilter, PostInput, PostStatus, VersionRecord};
use crate::error::{DomainError, RepoError};
use crate::ports::{PostRepository, RedirectRepository, VersionRepository};

use super::sitemap::SitemapService;

/// Maximum number of related posts returned for a post page.
pub const RELATED_LIMIT: usize = 3;

/// Owns every write to posts, version history and redirect rules.
///
/// Concurrent updates of the same post are not serialized: two racing
/// updates both read the same current version and the last write wins.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    versions: Arc<dyn VersionRepository>,
    redirects: Arc<dyn RedirectRepository>,
    sitemap: Arc<SitemapService>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        versions: Arc<dyn VersionRepository>,
        redirects: Arc<dyn RedirectRepository>,
        sitemap: Arc<SitemapService>,
    ) -> Self {
        Self {
            posts,
            versions,
            redirects,
            sitemap,
        }
    }

    /// Validate, derive and store a new post at version 1.
    pub async fn create(&self, input: PostInput) -> Result<Post, DomainError> {
        let validated = prepare(input)?;
        let now = Utc::now();

        let mut post = Post {
            id: Uuid::new_v4(),
            slug: String::new(),
            title: String::new(),
            excerpt: String::new(),
            content_html: String::new(),
            featured_image: Default::default(),
            category: String::new(),
            tags: Vec::new(),
            status: PostStatus::Draft,
            author_id: None,
            schema_type: Default::default(),
            table_of_contents_enabled: true,
            seo: Default::default(),
            internal_links: Vec::new(),
            redirect_from: Vec::new(),
            word_count: 0,
            reading_time: 1,
            table_of_contents: Vec::new(),
            search_index: Vec::new(),
            publish_date: None,
            created_at: now,
            updated_at: now,
            version: 1,
        };
        apply(validated, &mut post, now);
        derive_fields(&mut post);

        let stored = self.posts.insert(post).await?;
        self.versions.append(VersionRecord::snapshot(&stored)).await?;
        tracing::info!(post_id = %stored.id, slug = %stored.slug, status = %stored.status, "Post created");

        self.refresh_sitemap().await;
        self.reload(stored.id).await
    }

    /// Merge `input` over the stored post and persist it as the next version.
    ///
    /// The pre-update state is snapshotted before anything is written and a
    /// slug change is recorded as a redirect before the post itself. A
    /// rejected payload leaves no trace: no snapshot, no redirect, no write.
    pub async fn update(&self, id: Uuid, input: PostInput) -> Result<Post, DomainError> {
        let current = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;

        let validated = prepare(PostInput::from(&current).merge(input))?;

        // Creation already captured version 1; never snapshot a version twice.
        if self.versions.find(id, current.version).await?.is_none() {
            self.versions.append(VersionRecord::snapshot(&current)).await?;
        }

        let now = Utc::now();
        let mut next = current.clone();
        apply(validated, &mut next, now);

        let slug_change = SlugChange::detect(&current.slug, &next.slug);
        if let Some(change) = &slug_change {
            change.record_in(&mut next.redirect_from);
        }

        next.version = current.version + 1;
        next.created_at = current.created_at;
        next.updated_at = now;
        derive_fields(&mut next);

        // A stored slug change must never exist without its redirect rule.
        if let Some(change) = slug_change {
            tracing::info!(post_id = %id, from = %change.from, to = %change.to, "Slug changed, recording redirect");
            self.redirects.append(change.into_rule(id)).await?;
        }

        self.posts.update(next).await.map_err(|err| match err {
            RepoError::NotFound => DomainError::post_not_found(id),
            other => other.into(),
        })?;
        tracing::info!(post_id = %id, version = current.version + 1, "Post updated");

        self.refresh_sitemap().await;
        self.reload(id).await
    }

    /// Hard-delete the post. Its history and redirects are kept.
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.posts.delete(id).await.map_err(|err| match err {
            RepoError::NotFound => DomainError::post_not_found(id),
            other => other.into(),
        })?;
        tracing::info!(post_id = %id, "Post deleted");

        self.refresh_sitemap().await;
        Ok(())
    }

    /// Clone a post into a fresh draft with a `-copy` slug, numbered
    /// (`-copy-2`, `-copy-3`, ...) when earlier copies exist.
    pub async fn duplicate(&self, id: Uuid) -> Result<Post, DomainError> {
        let source = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;

        let mut input = PostInput::from(&source);
        input.title = Some(format!("{} (Copy)", source.title));
        input.slug = Some(self.free_slug(&format!("{}-copy", source.slug)).await?);
        input.status = Some(PostStatus::Draft.as_str().to_string());
        input.publish_date = None;

        tracing::debug!(source_id = %id, "Duplicating post");
        self.create(input).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        degrade(self.posts.find_by_id(id).await, "get post")
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, DomainError> {
        degrade(self.posts.find_by_slug(slug).await, "get post by slug")
    }

    pub async fn list_all(&self, filter: &PostFilter) -> Result<Vec<Post>, DomainError> {
        degrade(self.posts.list(filter).await, "list posts")
    }

    /// Publicly visible posts: published and not scheduled in the future,
    /// newest publish date first.
    pub async fn list_published(&self) -> Result<Vec<Post>, DomainError> {
        let now = Utc::now();
        let posts = degrade(
            self.posts.list_by_status(PostStatus::Published).await,
            "list published posts",
        )?;
        Ok(posts.into_iter().filter(|p| p.is_live(now)).collect())
    }

    /// Live posts sharing the target's category, excluding the target.
    pub async fn related(&self, id_or_slug: &str) -> Result<Vec<Post>, DomainError> {
        let target = match Uuid::parse_str(id_or_slug) {
            Ok(id) => self.get(id).await?,
            Err(_) => None,
        };
        let target = match target {
            Some(post) => Some(post),
            None => self.get_by_slug(id_or_slug).await?,
        };
        let Some(target) = target else {
            return Ok(Vec::new());
        };

        Ok(self
            .list_published()
            .await?
            .into_iter()
            .filter(|p| p.id != target.id && p.category == target.category)
            .take(RELATED_LIMIT)
            .collect())
    }

    pub async fn versions(&self, id: Uuid) -> Result<Vec<VersionRecord>, DomainError> {
        degrade(self.versions.list_for_post(id).await, "list versions")
    }

    /// Re-apply a stored snapshot as a regular update, so the restore itself
    /// is versioned.
    pub async fn restore(&self, id: Uuid, version: i32) -> Result<Post, DomainError> {
        let record = self
            .versions
            .find(id, version)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Version",
                id: format!("{id}@{version}"),
            })?;

        tracing::info!(post_id = %id, version, "Restoring post version");
        self.update(id, PostInput::from(&record.payload)).await
    }

    async fn free_slug(&self, base: &str) -> Result<String, DomainError> {
        let mut candidate = base.to_string();
        let mut n = 2;
        while self.posts.find_by_slug(&candidate).await?.is_some() {
            candidate = format!("{base}-{n}");
            n += 1;
        }
        Ok(candidate)
    }

    async fn reload(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    async fn refresh_sitemap(&self) {
        if let Err(err) = self.sitemap.rebuild().await {
            tracing::error!(error = %err, "Sitemap rebuild failed");
        }
    }
}

/// Normalize a payload and run it through the validator.
fn prepare(input: PostInput) -> Result<ValidatedPost, DomainError> {
    let mut input = input.with_defaults();
    input.content_html = input.content_html.map(|html| sanitize_content_html(&html));

    let report = validate(&input);
    if !report.is_valid() {
        tracing::debug!(fields = ?report.errors.keys().collect::<Vec<_>>(), "Post rejected by validation");
    }
    report.into_validated()
}

fn apply(validated: ValidatedPost, post: &mut Post, now: DateTime<Utc>) {
    post.title = validated.title;
    post.slug = validated.slug;
    post.excerpt = validated.excerpt;
    post.content_html = validated.content_html;
    post.featured_image = validated.featured_image;
    post.category = validated.category;
    post.tags = validated.tags;
    post.status = validated.status;
    post.author_id = validated.author_id;
    post.schema_type = validated.schema_type;
    post.table_of_contents_enabled = validated.table_of_contents_enabled;
    post.seo = validated.seo;
    post.internal_links = validated.internal_links;
    post.publish_date = match (validated.status, validated.publish_date) {
        (PostStatus::Published, None) => Some(now),
        (_, date) => date,
    };
}

/// Reads fall back to an empty result when the store is not reachable.
fn degrade<T: Default>(result: Result<T, RepoError>, operation: &str) -> Result<T, DomainError> {
    match result {
        Err(err) if err.is_unavailable() => {
            tracing::warn!(error = %err, operation, "Store unavailable, returning empty result");
            Ok(T::default())
        }
        other => other.map_err(Into::into),
    }
}
