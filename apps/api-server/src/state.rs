//! Application state - shared across all handlers.

use std::sync::Arc;

use folio_core::ports::{
    Cache, ObjectStore, PostRepository, RedirectRepository, SitemapSink, VersionRepository,
};
use folio_core::services::{
    LinkSuggester, MediaService, PostService, RedirectResolver, SitemapBuilder, SitemapService,
};
use folio_infra::{
    CacheSitemapSink, FileSitemapSink, FsObjectStore, InMemoryCache, InMemoryPostRepository,
    InMemoryRedirectRepository, InMemoryVersionRepository, UnconfiguredStore,
};

use crate::config::{AppConfig, StoreKind};

#[cfg(feature = "postgres")]
use folio_infra::database::{
    DatabaseConnections, PostgresPostRepository, PostgresRedirectRepository,
    PostgresVersionRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub sitemap: Arc<SitemapService>,
    pub redirects: Arc<RedirectResolver>,
    pub links: Arc<LinkSuggester>,
    pub media: Arc<MediaService>,
    pub cache: Arc<dyn Cache>,
    /// Whether writes can reach a store; reported by the health check.
    pub store_connected: bool,
}

/// The three stores behind the post services.
struct Stores {
    posts: Arc<dyn PostRepository>,
    versions: Arc<dyn VersionRepository>,
    redirects: Arc<dyn RedirectRepository>,
    connected: bool,
}

impl Stores {
    fn memory() -> Self {
        Self {
            posts: Arc::new(InMemoryPostRepository::new()),
            versions: Arc::new(InMemoryVersionRepository::new()),
            redirects: Arc::new(InMemoryRedirectRepository::new()),
            connected: true,
        }
    }

    fn unconfigured() -> Self {
        let store = Arc::new(UnconfiguredStore);
        Self {
            posts: store.clone(),
            versions: store.clone(),
            redirects: store,
            connected: false,
        }
    }

    async fn from_config(config: &AppConfig) -> Self {
        if config.store == StoreKind::Memory {
            tracing::warn!("FOLIO_STORE=memory - posts are kept in process and lost on restart");
            return Self::memory();
        }

        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        let conn = connections.main;
                        return Self {
                            posts: Arc::new(PostgresPostRepository::new(conn.clone())),
                            versions: Arc::new(PostgresVersionRepository::new(conn.clone())),
                            redirects: Arc::new(PostgresRedirectRepository::new(conn)),
                            connected: true,
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Running with a disconnected store.",
                            e
                        );
                        return Self::unconfigured();
                    }
                }
            }
        }

        tracing::warn!("DATABASE_URL not set. Running with a disconnected store.");
        Self::unconfigured()
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let cache: Arc<dyn Cache> = Arc::new(InMemoryCache::new());
        let stores = Stores::from_config(config).await;

        let sinks: Vec<Arc<dyn SitemapSink>> = vec![
            Arc::new(CacheSitemapSink::new(cache.clone())),
            Arc::new(FileSitemapSink::new(&config.site.sitemap_path)),
        ];
        let media_store = Arc::new(FsObjectStore::new(
            &config.site.media_dir,
            &config.site.media_base_url,
        ));

        let state = Self::assemble(
            stores,
            cache,
            SitemapBuilder::new(&config.site.site_url),
            sinks,
            media_store,
        );
        tracing::info!(connected = state.store_connected, "Application state initialized");
        state
    }

    /// State over fresh in-memory stores, for handler tests.
    #[cfg(test)]
    pub fn in_memory(site_url: &str, media_dir: &std::path::Path) -> Self {
        let cache: Arc<dyn Cache> = Arc::new(InMemoryCache::new());
        let sinks: Vec<Arc<dyn SitemapSink>> = vec![Arc::new(CacheSitemapSink::new(cache.clone()))];
        let media_store = Arc::new(FsObjectStore::new(media_dir, format!("{site_url}/media")));

        Self::assemble(
            Stores::memory(),
            cache,
            SitemapBuilder::new(site_url),
            sinks,
            media_store,
        )
    }

    fn assemble(
        stores: Stores,
        cache: Arc<dyn Cache>,
        builder: SitemapBuilder,
        sinks: Vec<Arc<dyn SitemapSink>>,
        media_store: Arc<dyn ObjectStore>,
    ) -> Self {
        let sitemap = Arc::new(SitemapService::new(stores.posts.clone(), builder, sinks));
        let posts = Arc::new(PostService::new(
            stores.posts.clone(),
            stores.versions,
            stores.redirects.clone(),
            sitemap.clone(),
        ));

        Self {
            posts,
            sitemap,
            redirects: Arc::new(RedirectResolver::new(stores.redirects)),
            links: Arc::new(LinkSuggester::new(stores.posts)),
            media: Arc::new(MediaService::new(media_store)),
            cache,
            store_connected: stores.connected,
        }
    }
}
