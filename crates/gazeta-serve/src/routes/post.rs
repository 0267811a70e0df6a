//! Post detail route.

use axum::extract::{Path, State};
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use gazeta_core::readtime;

use super::html_response;
use crate::cms::WARMUP_PAGE_SIZE;
use crate::error::ServeError;
use crate::preview::PreviewSession;
use crate::render;
use crate::state::{AppState, CachedHtml};

/// Render a post detail page.
///
/// Unknown slugs become a 404 page; repository failures bubble up to the
/// HTML error page.
pub async fn post_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    jar: CookieJar,
) -> Result<Response, ServeError> {
    let preview = PreviewSession::from_jar(&jar);
    let cache_key = format!("/post/{slug}");

    if !preview.active()
        && let Some(cached) = state.cache.get(&cache_key).await
    {
        tracing::debug!(key = %cache_key, "cache hit");
        return Ok(html_response(&cached.html, true));
    }

    let html = build_post_html(&state, &slug, &preview).await?;

    if !preview.active() {
        let cached = CachedHtml {
            html: html.clone(),
            cached_at: chrono::Utc::now(),
        };
        state.cache.insert(cache_key, cached).await;
    }

    Ok(html_response(&html, !preview.active()))
}

/// Fetch a post and render its full page.
async fn build_post_html(
    state: &AppState,
    slug: &str,
    preview: &PreviewSession,
) -> Result<String, ServeError> {
    let Some(post) = state.cms.get_by_uid(slug, preview.ref_token()).await? else {
        return Err(ServeError::NotFound(format!("post '{slug}'")));
    };

    let minutes_to_read = readtime::estimate_minutes(&post.content);

    let (previous, next) = if let Some(ts) = post.published_at {
        tokio::join!(
            state.cms.first_after(ts, preview.ref_token()),
            state.cms.first_before(ts, preview.ref_token())
        )
    } else {
        (Ok(None), Ok(None))
    };

    // A missing neighbor is an expected empty result. A failed lookup is
    // logged and the page renders without that link.
    let previous = previous.unwrap_or_else(|err| {
        tracing::warn!(slug = %slug, error = %err, "previous-post lookup failed");
        None
    });
    let next = next.unwrap_or_else(|err| {
        tracing::warn!(slug = %slug, error = %err, "next-post lookup failed");
        None
    });

    let markup = render::post::render(
        &post,
        minutes_to_read,
        previous.as_ref(),
        next.as_ref(),
        preview.active(),
        &state.config,
    );
    Ok(markup.into_string())
}

/// Pre-render the most recent posts into the HTML cache.
///
/// Runs once at startup so the freshest detail pages are served warm from
/// the first request on. Failures are logged and skipped; the server starts
/// either way.
pub async fn warm_recent_posts(state: AppState) {
    let page = match state.cms.latest_posts(WARMUP_PAGE_SIZE, None).await {
        Ok(page) => page,
        Err(err) => {
            tracing::warn!(error = %err, "cache warmup skipped");
            return;
        }
    };

    let jobs = page.results.into_iter().map(|summary| {
        let state = state.clone();
        async move {
            match build_post_html(&state, &summary.uid, &PreviewSession::default()).await {
                Ok(html) => {
                    let cached = CachedHtml {
                        html,
                        cached_at: chrono::Utc::now(),
                    };
                    state.cache.insert(format!("/post/{}", summary.uid), cached).await;
                    true
                }
                Err(err) => {
                    tracing::warn!(uid = %summary.uid, error = %err, "warmup render failed");
                    false
                }
            }
        }
    });

    let results = futures::future::join_all(jobs).await;
    let warmed = results.into_iter().filter(|ok| *ok).count();
    tracing::info!(warmed, "post cache warmup finished");
}
