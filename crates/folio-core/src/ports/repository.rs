use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostFilter, PostStatus, RedirectRule, VersionRecord};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Replace an existing entity. Fails with `RepoError::NotFound` if absent.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` if absent.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository - the primary `posts` collection.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// Posts matching `filter`, newest `created_at` first.
    async fn list(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError>;

    /// Posts with `status`, newest publish date first.
    async fn list_by_status(&self, status: PostStatus) -> Result<Vec<Post>, RepoError>;
}

/// Per-post version history. Records are never updated or removed.
#[async_trait]
pub trait VersionRepository: Send + Sync {
    async fn append(&self, record: VersionRecord) -> Result<VersionRecord, RepoError>;

    async fn find(&self, post_id: Uuid, version: i32) -> Result<Option<VersionRecord>, RepoError>;

    /// All snapshots of a post, highest version first.
    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<VersionRecord>, RepoError>;
}

/// Append-only redirect log.
#[async_trait]
pub trait RedirectRepository: Send + Sync {
    async fn append(&self, rule: RedirectRule) -> Result<RedirectRule, RepoError>;

    /// The most recently created rule whose `from` equals `slug`.
    async fn latest_from(&self, slug: &str) -> Result<Option<RedirectRule>, RepoError>;

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<RedirectRule>, RepoError>;
}
