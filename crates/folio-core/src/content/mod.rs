//! Content rules: validation, slugs, HTML clean-up and derived fields.

pub mod derive;
pub mod html;
pub mod slug;
pub mod validation;

pub use derive::{
    build_search_index, derive_fields, estimate_reading_time, generate_table_of_contents,
    reading_time, sanitize_tags, word_count,
};
pub use html::{sanitize_content_html, strip_tags};
pub use slug::{SlugChange, slug_candidate, slugify};
pub use validation::{ValidatedPost, ValidationReport, validate};
