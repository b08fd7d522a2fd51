//! Media uploads for post content.

use std::sync::Arc;

use crate::error::DomainError;
use crate::ports::{ObjectStore, StorageError, StoredObject};

const MAX_NAME_LEN: usize = 200;

pub struct MediaService {
    store: Arc<dyn ObjectStore>,
}

impl MediaService {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Store a file under `blogs/{post_id}/media/{filename}` and return its
    /// public URL.
    pub async fn upload(
        &self,
        post_id: &str,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, DomainError> {
        check_segment("postId", post_id)?;
        check_segment("filename", filename)?;
        if bytes.is_empty() {
            return Err(DomainError::invalid("file", "File is empty."));
        }

        let key = media_key(post_id, filename);
        let size = bytes.len();
        match self.store.put(&key, bytes, content_type).await {
            Ok(url) => {
                tracing::info!(%key, size, "Media uploaded");
                Ok(url)
            }
            Err(err) => {
                tracing::error!(%key, error = %err, "Media upload failed");
                Err(DomainError::Upload(
                    "Upload failed. Please try again.".to_string(),
                ))
            }
        }
    }

    /// Media already stored for a post; empty when storage is not configured.
    pub async fn list(&self, post_id: &str) -> Result<Vec<StoredObject>, DomainError> {
        check_segment("postId", post_id)?;
        match self.store.list(&format!("blogs/{post_id}/media/")).await {
            Ok(objects) => Ok(objects),
            Err(StorageError::NotConfigured) => Ok(Vec::new()),
            Err(err) => Err(DomainError::Internal(err.to_string())),
        }
    }
}

pub fn media_key(post_id: &str, filename: &str) -> String {
    format!("blogs/{post_id}/media/{filename}")
}

/// Reject anything that could escape its directory.
fn check_segment(field: &str, value: &str) -> Result<(), DomainError> {
    let valid = !value.is_empty()
        && value.len() <= MAX_NAME_LEN
        && !value.starts_with('.')
        && !value.contains(['/', '\\', '\0']);
    if valid {
        Ok(())
    } else {
        Err(DomainError::invalid(field, format!("Invalid {field}.")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_scoped_per_post() {
        assert_eq!(media_key("p1", "hero.webp"), "blogs/p1/media/hero.webp");
    }

    #[test]
    fn traversal_is_rejected() {
        assert!(check_segment("filename", "../etc/passwd").is_err());
        assert!(check_segment("filename", ".env").is_err());
        assert!(check_segment("filename", "a\\b").is_err());
        assert!(check_segment("filename", "").is_err());
        assert!(check_segment("filename", "hero.webp").is_ok());
    }
}
