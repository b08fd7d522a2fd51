use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use folio_core::ports::{ObjectStore, StorageError, StoredObject};

/// Stores objects as files under a root directory served at `base_url`.
///
/// Keys are `/`-separated and map straight onto relative paths.
pub struct FsObjectStore {
    root: PathBuf,
    base_url: String,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<String, StorageError> {
        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Write(e.to_string()))?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| StorageError::Write(e.to_string()))?;

        tracing::debug!(path = %path.display(), %content_type, "Object written");
        Ok(self.url_for(key))
    }

    async fn list(&self, prefix: &str) -> Result<Vec<StoredObject>, StorageError> {
        let prefix = prefix.trim_end_matches('/');
        let dir = self.root.join(prefix);

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::Read(e.to_string())),
        };

        let mut objects = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::Read(e.to_string()))?
        {
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let key = format!("{prefix}/{name}");
            objects.push(StoredObject {
                url: self.url_for(&key),
                key,
            });
        }

        objects.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(objects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path(), "https://site.example/media/");

        let url = store
            .put("blogs/p1/media/hero.webp", b"webp".to_vec(), "image/webp")
            .await
            .unwrap();
        assert_eq!(url, "https://site.example/media/blogs/p1/media/hero.webp");

        store
            .put("blogs/p1/media/a.png", b"png".to_vec(), "image/png")
            .await
            .unwrap();

        let objects = store.list("blogs/p1/media/").await.unwrap();
        let keys: Vec<&str> = objects.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["blogs/p1/media/a.png", "blogs/p1/media/hero.webp"]);
    }

    #[tokio::test]
    async fn test_list_missing_prefix_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path(), "/media");

        assert!(store.list("blogs/none/media/").await.unwrap().is_empty());
    }
}
