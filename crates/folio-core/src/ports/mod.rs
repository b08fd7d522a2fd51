//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod cache;
mod repository;
mod sitemap;
mod storage;

pub use cache::{Cache, CacheError};
pub use repository::{BaseRepository, PostRepository, RedirectRepository, VersionRepository};
pub use sitemap::{SinkError, SitemapSink};
pub use storage::{ObjectStore, StorageError, StoredObject};
