//! HTML clean-up applied to post bodies before they are stored.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

static SCRIPT_OR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("valid regex")
});

static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+on[a-z]+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#).expect("valid regex")
});

static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img\b([^>]*)>").expect("valid regex"));

/// Replace every tag with a space, leaving only text content.
pub fn strip_tags(html: &str) -> Cow<'_, str> {
    TAG.replace_all(html, " ")
}

/// Remove executable markup and make images lazy-loading.
///
/// Drops `<script>`/`<style>` elements and inline `on*` handlers, then adds
/// `loading="lazy" decoding="async"` to `<img>` tags that lack them. Running
/// it on already-sanitized content is a no-op.
pub fn sanitize_content_html(html: &str) -> String {
    let without_scripts = SCRIPT_OR_STYLE.replace_all(html, "");
    let without_handlers = TAG.replace_all(&without_scripts, |caps: &Captures<'_>| {
        EVENT_HANDLER.replace_all(&caps[0], "").into_owned()
    });
    IMG_TAG
        .replace_all(&without_handlers, |caps: &Captures<'_>| lazy_img(&caps[1]))
        .into_owned()
}

fn lazy_img(attrs: &str) -> String {
    let lower = attrs.to_ascii_lowercase();
    let (body, closing) = match attrs.strip_suffix('/') {
        Some(body) => (body.trim_end(), " /"),
        None => (attrs.trim_end(), ""),
    };

    let mut tag = String::from("<img");
    if !lower.contains("loading=") {
        tag.push_str(" loading=\"lazy\"");
    }
    if !lower.contains("decoding=") {
        tag.push_str(" decoding=\"async\"");
    }
    tag.push_str(body);
    tag.push_str(closing);
    tag.push('>');
    tag
}
