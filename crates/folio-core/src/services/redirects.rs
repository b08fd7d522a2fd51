//! Redirect resolution for retired slugs.

use std::sync::Arc;

use crate::error::DomainError;
use crate::ports::RedirectRepository;

/// Path prefix under which posts are served.
const BLOG_PREFIX: &str = "blog/";

/// Resolves a requested slug to its replacement.
///
/// Resolution is a single hop: with `a -> b` and `b -> c` recorded, a request
/// for `a` resolves to `b`, not `c`.
pub struct RedirectResolver {
    redirects: Arc<dyn RedirectRepository>,
}

impl RedirectResolver {
    pub fn new(redirects: Arc<dyn RedirectRepository>) -> Self {
        Self { redirects }
    }

    /// Target of the most recent rule for `slug`, if any.
    pub async fn resolve(&self, slug: &str) -> Result<Option<String>, DomainError> {
        let slug = slug.trim_matches('/');
        if slug.is_empty() {
            return Ok(None);
        }

        match self.redirects.latest_from(slug).await {
            Ok(rule) => Ok(rule.map(|r| r.to)),
            Err(err) if err.is_unavailable() => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Try the slug first, then the request path (with or without the
    /// `blog/` prefix).
    pub async fn lookup(
        &self,
        slug: Option<&str>,
        path: Option<&str>,
    ) -> Result<Option<String>, DomainError> {
        if let Some(slug) = slug {
            if let Some(target) = self.resolve(slug).await? {
                return Ok(Some(target));
            }
        }

        let Some(path) = path.map(|p| p.trim_matches('/')) else {
            return Ok(None);
        };
        if let Some(target) = self.resolve(path).await? {
            return Ok(Some(target));
        }
        match path.strip_prefix(BLOG_PREFIX) {
            Some(stripped) => self.resolve(stripped).await,
            None => Ok(None),
        }
    }
}
