//! Listing route.
//!
//! `GET /` shows the first page of the listing. The "Carregar mais posts"
//! control links back here with `?pages=N`, and the handler walks the
//! listing forward until N pages are accumulated or the cursor runs out.

use axum::extract::{Query, State};
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use gazeta_core::PostWalker;
use serde::Deserialize;

use super::html_response;
use crate::cms::LISTING_PAGE_SIZE;
use crate::error::ServeError;
use crate::preview::PreviewSession;
use crate::render;
use crate::state::{AppState, CachedHtml};

/// Upper bound on pages a single request may walk.
const MAX_LISTING_PAGES: u32 = 20;

/// Query parameters of the listing route.
#[derive(Debug, Deserialize)]
pub struct ListingParams {
    /// How many pages of the listing to accumulate.
    #[serde(default = "default_pages")]
    pages: u32,
}

fn default_pages() -> u32 {
    1
}

/// Render the listing page.
pub async fn home_page(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
    jar: CookieJar,
) -> Result<Response, ServeError> {
    let preview = PreviewSession::from_jar(&jar);
    let pages = params.pages.clamp(1, MAX_LISTING_PAGES);

    let cache_key = if pages == 1 {
        "/".to_string()
    } else {
        format!("/?pages={pages}")
    };

    if !preview.active()
        && let Some(cached) = state.cache.get(&cache_key).await
    {
        tracing::debug!(key = %cache_key, "cache hit");
        return Ok(html_response(&cached.html, true));
    }

    let first_page = state
        .cms
        .latest_posts(LISTING_PAGE_SIZE, preview.ref_token())
        .await?;
    let mut walker = PostWalker::new(state.cms.clone(), first_page);

    let mut loaded = 1;
    while loaded < pages && walker.has_more() {
        walker.load_more().await?;
        loaded += 1;
    }

    let load_more_href = walker
        .has_more()
        .then(|| format!("/?pages={}", loaded + 1));

    let markup = render::home::render(
        walker.results(),
        load_more_href.as_deref(),
        preview.active(),
        &state.config.site_name,
    );
    let html = markup.into_string();

    if !preview.active() {
        let cached = CachedHtml {
            html: html.clone(),
            cached_at: chrono::Utc::now(),
        };
        state.cache.insert(cache_key, cached).await;
    }

    Ok(html_response(&html, !preview.active()))
}
