//! # Folio Infrastructure
//!
//! Concrete implementations of the ports defined in `folio-core`.
//! This crate contains the post stores, cache, object storage and sitemap
//! sinks.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL stores via SeaORM

pub mod cache;
pub mod database;
pub mod memory;
pub mod sitemap;
pub mod storage;

// Re-exports - In-Memory
pub use cache::InMemoryCache;
pub use database::{DatabaseConnections, UnconfiguredStore};
pub use memory::{InMemoryPostRepository, InMemoryRedirectRepository, InMemoryVersionRepository};
pub use sitemap::{CacheSitemapSink, FileSitemapSink, SITEMAP_CACHE_KEY};
pub use storage::FsObjectStore;
