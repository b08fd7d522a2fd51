//! Application services built on the ports.

mod links;
mod media;
mod posts;
mod redirects;
mod sitemap;

pub use links::{LinkSuggester, MAX_SUGGESTIONS, rank};
pub use media::{MediaService, media_key};
pub use posts::{PostService, RELATED_LIMIT};
pub use redirects::RedirectResolver;
pub use sitemap::{SitemapBuilder, SitemapService};
