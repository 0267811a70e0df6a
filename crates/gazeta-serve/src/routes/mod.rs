//! Route definitions for the blog front-end.
//!
//! ## Routes
//!
//! - `GET /` - Listing page (`?pages=N` walks N pages of the listing)
//! - `GET /post/{slug}` - Post detail page
//! - `GET /api/preview` - Enter preview mode (token exchange)
//! - `GET /api/exit-preview` - Leave preview mode
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions

mod health;
mod home;
mod post;
mod preview;

pub use post::warm_recent_posts;

use axum::Router;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::render::components::CSP_HEADER;
use crate::state::AppState;

/// Build the complete router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/post/{slug}", get(post::post_page))
        .route("/api/preview", get(preview::enter_preview))
        .route("/api/exit-preview", get(preview::exit_preview))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}

/// Build an HTTP response with HTML content and security/cache headers.
///
/// Published pages get a CDN-friendly Cache-Control (the ten-minute
/// `s-maxage` matches the HTML cache TTL); preview pages are never stored.
pub(crate) fn html_response(html: &str, cacheable: bool) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    let cache_control = if cacheable {
        "public, max-age=60, s-maxage=600, stale-while-revalidate=60"
    } else {
        "no-store"
    };
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    );

    (StatusCode::OK, headers, html.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_response_sets_content_type_and_etag() {
        let response = html_response("<p>hi</p>", true);
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "text/html; charset=utf-8");
        assert!(headers.contains_key(header::ETAG));
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    }

    #[test]
    fn cacheable_responses_get_cdn_ttl() {
        let response = html_response("<p>hi</p>", true);
        let cache = response.headers()[header::CACHE_CONTROL].to_str().unwrap();
        assert!(cache.contains("s-maxage=600"));
    }

    #[test]
    fn preview_responses_are_never_stored() {
        let response = html_response("<p>draft</p>", false);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    }

    #[test]
    fn equal_bodies_share_an_etag() {
        let a = html_response("<p>same</p>", true);
        let b = html_response("<p>same</p>", true);
        assert_eq!(a.headers()[header::ETAG], b.headers()[header::ETAG]);

        let c = html_response("<p>other</p>", true);
        assert_ne!(a.headers()[header::ETAG], c.headers()[header::ETAG]);
    }
}
