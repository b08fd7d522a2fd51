//! Internal-link suggestions for the editor.
//!
//! Advisory only: nothing checks that a suggested slug still exists when the
//! linking post is rendered.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{LinkSuggestion, Post, PostFilter};
use crate::error::DomainError;
use crate::ports::PostRepository;

pub const MAX_SUGGESTIONS: usize = 8;

pub struct LinkSuggester {
    posts: Arc<dyn PostRepository>,
}

impl LinkSuggester {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Up to [`MAX_SUGGESTIONS`] posts, newest first, matching any query term
    /// against the keyword index. An empty query returns the newest posts.
    pub async fn suggest(
        &self,
        query: Option<&str>,
        exclude: Option<Uuid>,
    ) -> Result<Vec<LinkSuggestion>, DomainError> {
        let posts = match self.posts.list(&PostFilter::default()).await {
            Ok(posts) => posts,
            Err(err) if err.is_unavailable() => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(rank(&posts, query.unwrap_or_default(), exclude))
    }
}

/// `posts` must already be ordered newest first.
pub fn rank(posts: &[Post], query: &str, exclude: Option<Uuid>) -> Vec<LinkSuggestion> {
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

    posts
        .iter()
        .filter(|post| Some(post.id) != exclude)
        .filter(|post| terms.is_empty() || terms.iter().any(|t| post.search_index.contains(t)))
        .take(MAX_SUGGESTIONS)
        .map(LinkSuggestion::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::build_search_index;
    use crate::domain::{PostStatus, fixtures};

    fn indexed(slug: &str, tags: &[&str]) -> Post {
        let mut post = fixtures::post(slug, PostStatus::Published);
        post.tags = tags.iter().map(|t| t.to_string()).collect();
        post.search_index = build_search_index(&post);
        post
    }

    #[test]
    fn empty_query_returns_newest_posts_up_to_the_limit() {
        let posts: Vec<Post> = (0..12).map(|i| indexed(&format!("p{i}"), &[])).collect();
        let suggestions = rank(&posts, "  ", None);

        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(suggestions[0].slug, "p0");
    }

    #[test]
    fn terms_match_case_insensitively() {
        let posts = vec![indexed("local-seo", &["maps"]), indexed("ppc-basics", &["ads"])];
        let suggestions = rank(&posts, "MAPS", None);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].slug, "local-seo");
    }

    #[test]
    fn excluded_post_is_skipped() {
        let posts = vec![indexed("a-post", &[]), indexed("b-post", &[])];
        let suggestions = rank(&posts, "", Some(posts[0].id));

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].slug, "b-post");
    }
}
