//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use folio_infra::database::DatabaseConfig;

const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Which post store backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// PostgreSQL when `DATABASE_URL` is set, otherwise disconnected.
    Postgres,
    /// Process-local store; contents are lost on restart.
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub database: Option<DatabaseConfig>,
    pub site: SiteConfig,
}

/// Public site settings used for sitemap URLs and media.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub site_url: String,
    pub sitemap_path: PathBuf,
    pub media_dir: PathBuf,
    pub media_base_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(20),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(2),
        });

        let store = match env::var("FOLIO_STORE").map(|v| v.to_lowercase()).as_deref() {
            Ok("memory") => StoreKind::Memory,
            _ => StoreKind::Postgres,
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            store,
            database,
            site: SiteConfig::from_env(),
        }
    }
}

impl SiteConfig {
    fn from_env() -> Self {
        let site_url = env::var("SITE_URL")
            .unwrap_or_else(|_| DEFAULT_SITE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let media_base_url =
            env::var("MEDIA_BASE_URL").unwrap_or_else(|_| format!("{site_url}/media"));

        Self {
            sitemap_path: env::var("SITEMAP_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public/sitemap.xml")),
            media_dir: env::var("MEDIA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public/media")),
            media_base_url,
            site_url,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
