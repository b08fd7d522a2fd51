//! Slug normalization and slug-change bookkeeping.

use chrono::Utc;
use deunicode::deunicode;
use uuid::Uuid;

use crate::domain::RedirectRule;

/// Normalize free text into a URL slug: ASCII-transliterated, lowercase,
/// hyphen-joined, with punctuation removed.
///
/// ```
/// use folio_core::content::slugify;
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Crème brûlée 101 "), "creme-brulee-101");
/// ```
pub fn slugify(input: &str) -> String {
    let ascii = deunicode(input);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
        }
    }

    slug
}

/// Pick the slug source in precedence order: explicit override, stored or
/// submitted slug, then the title.
pub fn slug_candidate<'a>(
    override_slug: Option<&'a str>,
    slug: Option<&'a str>,
    title: Option<&'a str>,
) -> Option<&'a str> {
    [override_slug, slug, title]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
}

/// A detected change of a post's public slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugChange {
    pub from: String,
    pub to: String,
}

impl SlugChange {
    /// `None` when the slug is unchanged.
    pub fn detect(before: &str, after: &str) -> Option<Self> {
        (before != after).then(|| Self {
            from: before.to_string(),
            to: after.to_string(),
        })
    }

    /// Record the retired slug in the post's `redirectFrom` list, once.
    pub fn record_in(&self, redirect_from: &mut Vec<String>) {
        if !redirect_from.iter().any(|s| s == &self.from) {
            redirect_from.push(self.from.clone());
        }
    }

    pub fn into_rule(self, post_id: Uuid) -> RedirectRule {
        RedirectRule {
            id: Uuid::new_v4(),
            post_id,
            from: self.from,
            to: self.to,
            created_at: Utc::now(),
        }
    }
}
