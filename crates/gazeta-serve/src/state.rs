//! Application state shared across all request handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::cms::CmsClient;
use crate::config::Config;

/// Cached rendered page with metadata.
#[derive(Clone, Debug)]
pub struct CachedHtml {
    /// Rendered HTML string.
    pub html: String,
    /// When this entry was cached.
    pub cached_at: chrono::DateTime<chrono::Utc>,
}

/// Type alias for the rendered-page cache, keyed by request path.
pub type HtmlCache = Cache<String, CachedHtml>;

/// Cache capacity (number of rendered pages).
const CACHE_CAPACITY: u64 = 1_000;

/// How long a rendered page stays valid before it is re-fetched from the
/// content repository. Ten minutes, matching the CDN revalidation window.
const CACHE_TTL: Duration = Duration::from_secs(600);

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Content repository client.
    pub cms: CmsClient,

    /// Application configuration.
    pub config: Arc<Config>,

    /// Rendered-page cache. Preview sessions bypass it.
    pub cache: HtmlCache,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let cms = CmsClient::new(&config.cms_api_url, config.cms_access_token.clone())?;

        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        tracing::info!(
            cache_capacity = CACHE_CAPACITY,
            cache_ttl_secs = CACHE_TTL.as_secs(),
            "application state initialized"
        );

        Ok(Self {
            cms,
            config: Arc::new(config),
            cache,
        })
    }
}
