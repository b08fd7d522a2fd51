use std::cmp::Reverse;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use folio_core::domain::{RedirectRule, VersionRecord};
use folio_core::error::RepoError;
use folio_core::ports::{RedirectRepository, VersionRepository};

/// Append-only snapshot log.
#[derive(Default)]
pub struct InMemoryVersionRepository {
    records: RwLock<Vec<VersionRecord>>,
}

impl InMemoryVersionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VersionRepository for InMemoryVersionRepository {
    async fn append(&self, record: VersionRecord) -> Result<VersionRecord, RepoError> {
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn find(&self, post_id: Uuid, version: i32) -> Result<Option<VersionRecord>, RepoError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.post_id == post_id && r.version == version)
            .cloned())
    }

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<VersionRecord>, RepoError> {
        let records = self.records.read().await;
        let mut matching: Vec<VersionRecord> = records.iter().filter(|r| r.post_id == post_id).cloned().collect();
        matching.sort_by_key(|r| Reverse(r.version));
        Ok(matching)
    }
}

/// Append-only redirect log. Later entries shadow earlier ones with the same
/// `from`.
#[derive(Default)]
pub struct InMemoryRedirectRepository {
    rules: RwLock<Vec<RedirectRule>>,
}

impl InMemoryRedirectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RedirectRepository for InMemoryRedirectRepository {
    async fn append(&self, rule: RedirectRule) -> Result<RedirectRule, RepoError> {
        self.rules.write().await.push(rule.clone());
        Ok(rule)
    }

    async fn latest_from(&self, slug: &str) -> Result<Option<RedirectRule>, RepoError> {
        let rules = self.rules.read().await;
        Ok(rules.iter().rev().find(|r| r.from == slug).cloned())
    }

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<RedirectRule>, RepoError> {
        let rules = self.rules.read().await;
        Ok(rules.iter().filter(|r| r.post_id == post_id).cloned().collect())
    }
}
