use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Post;

/// Immutable snapshot of a post as it stood at `version`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    pub id: Uuid,
    pub post_id: Uuid,
    pub version: i32,
    pub payload: Post,
    pub created_at: DateTime<Utc>,
}

impl VersionRecord {
    pub fn snapshot(post: &Post) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id: post.id,
            version: post.version,
            payload: post.clone(),
            created_at: Utc::now(),
        }
    }
}

/// Permanent mapping from a retired slug to its replacement. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectRule {
    pub id: Uuid,
    pub post_id: Uuid,
    pub from: String,
    pub to: String,
    pub created_at: DateTime<Utc>,
}

/// Cross-linking candidate returned to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSuggestion {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl From<&Post> for LinkSuggestion {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            category: post.category.clone(),
            tags: post.tags.clone(),
        }
    }
}
