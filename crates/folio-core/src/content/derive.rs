//! Fields computed from post content on every save.

use std::sync::LazyLock;

use regex::Regex;

use super::html::strip_tags;
use crate::domain::{Post, TocEntry};

pub const WORDS_PER_MINUTE: u32 = 200;

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h2\b[^>]*>(.*?)</h2\s*>|<h3\b[^>]*>(.*?)</h3\s*>").expect("valid regex")
});

/// Number of whitespace-separated words once markup is removed.
pub fn word_count(html: &str) -> u32 {
    strip_tags(html).split_whitespace().count() as u32
}

/// Minutes at 200 words per minute, rounded up, never less than one.
pub fn reading_time(words: u32) -> u32 {
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

pub fn estimate_reading_time(html: &str) -> u32 {
    reading_time(word_count(html))
}

/// Extract `<h2>`/`<h3>` headings in document order.
///
/// Ids are positional (`heading-1`, `heading-2`, ...) so the same content
/// always yields the same entries.
pub fn generate_table_of_contents(html: &str) -> Vec<TocEntry> {
    HEADING
        .captures_iter(html)
        .enumerate()
        .map(|(index, caps)| {
            let (level, inner) = match (caps.get(1), caps.get(2)) {
                (Some(h2), _) => (2, h2.as_str()),
                (None, Some(h3)) => (3, h3.as_str()),
                (None, None) => (2, ""),
            };
            TocEntry {
                id: format!("heading-{}", index + 1),
                label: strip_tags(inner).split_whitespace().collect::<Vec<_>>().join(" "),
                level,
            }
        })
        .collect()
}

/// Trim, lowercase and de-duplicate tags, dropping empty ones.
pub fn sanitize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

/// Lowercase keyword index over title, slug, category, tags and SEO keywords.
pub fn build_search_index(post: &Post) -> Vec<String> {
    let tags = post.tags.join(" ");
    let secondary = post.seo.secondary_keywords.join(" ");
    let sources = [
        post.title.as_str(),
        post.slug.as_str(),
        post.category.as_str(),
        tags.as_str(),
        post.seo.focus_keyword.as_str(),
        secondary.as_str(),
    ]
    .join(" ")
    .to_lowercase();

    let mut index: Vec<String> = Vec::new();
    for term in sources.split_whitespace() {
        if !index.iter().any(|t| t == term) {
            index.push(term.to_string());
        }
    }
    index
}

/// Recompute every derived field of `post` from its current content.
pub fn derive_fields(post: &mut Post) {
    post.word_count = word_count(&post.content_html);
    post.reading_time = reading_time(post.word_count);
    post.table_of_contents = if post.table_of_contents_enabled {
        generate_table_of_contents(&post.content_html)
    } else {
        Vec::new()
    };
    post.search_index = build_search_index(post);
}
