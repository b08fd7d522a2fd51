//! Store used when no database is reachable or configured.

use async_trait::async_trait;
use uuid::Uuid;

use folio_core::domain::{Post, PostFilter, PostStatus, RedirectRule, VersionRecord};
use folio_core::error::RepoError;
use folio_core::ports::{BaseRepository, PostRepository, RedirectRepository, VersionRepository};

/// Fails every operation with [`RepoError::Unavailable`].
///
/// Services turn this into empty reads and `StoreUnavailable` writes, so the
/// server can boot and serve public pages without a database.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredStore;

#[async_trait]
impl BaseRepository<Post, Uuid> for UnconfiguredStore {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, RepoError> {
        Err(RepoError::Unavailable)
    }

    async fn insert(&self, _entity: Post) -> Result<Post, RepoError> {
        Err(RepoError::Unavailable)
    }

    async fn update(&self, _entity: Post) -> Result<Post, RepoError> {
        Err(RepoError::Unavailable)
    }

    async fn delete(&self, _id: Uuid) -> Result<(), RepoError> {
        Err(RepoError::Unavailable)
    }
}

#[async_trait]
impl PostRepository for UnconfiguredStore {
    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Post>, RepoError> {
        Err(RepoError::Unavailable)
    }

    async fn list(&self, _filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        Err(RepoError::Unavailable)
    }

    async fn list_by_status(&self, _status: PostStatus) -> Result<Vec<Post>, RepoError> {
        Err(RepoError::Unavailable)
    }
}

#[async_trait]
impl VersionRepository for UnconfiguredStore {
    async fn append(&self, _record: VersionRecord) -> Result<VersionRecord, RepoError> {
        Err(RepoError::Unavailable)
    }

    async fn find(&self, _post_id: Uuid, _version: i32) -> Result<Option<VersionRecord>, RepoError> {
        Err(RepoError::Unavailable)
    }

    async fn list_for_post(&self, _post_id: Uuid) -> Result<Vec<VersionRecord>, RepoError> {
        Err(RepoError::Unavailable)
    }
}

#[async_trait]
impl RedirectRepository for UnconfiguredStore {
    async fn append(&self, _rule: RedirectRule) -> Result<RedirectRule, RepoError> {
        Err(RepoError::Unavailable)
    }

    async fn latest_from(&self, _slug: &str) -> Result<Option<RedirectRule>, RepoError> {
        Err(RepoError::Unavailable)
    }

    async fn list_for_post(&self, _post_id: Uuid) -> Result<Vec<RedirectRule>, RepoError> {
        Err(RepoError::Unavailable)
    }
}
