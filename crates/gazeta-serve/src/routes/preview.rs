//! Preview mode endpoints.
//!
//! `GET /api/preview` is the URL the content repository calls when an editor
//! opens a preview: it carries the preview ref as `token` and optionally the
//! slug of the document being previewed. `GET /api/exit-preview` ends the
//! session. Both answer with a redirect; the exit-preview button on the
//! pages fetches the exit endpoint and only reloads when it sees HTTP 200
//! together with the redirect flag.

use axum::extract::Query;
use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use crate::cms;
use crate::error::ServeError;
use crate::preview::PREVIEW_COOKIE;

/// Query parameters of the preview entry endpoint.
#[derive(Debug, Deserialize)]
pub struct EnterPreviewParams {
    /// Preview ref issued by the repository.
    token: Option<String>,
    /// Document the preview targets, if any.
    slug: Option<String>,
}

/// Open a preview session: store the preview ref in the cookie and redirect
/// to the previewed document.
pub async fn enter_preview(
    Query(params): Query<EnterPreviewParams>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), ServeError> {
    let Some(token) = params.token.filter(|t| !t.is_empty()) else {
        return Err(ServeError::BadRequest("missing preview token".to_string()));
    };

    let target = match &params.slug {
        Some(slug) => cms::link_resolver("post", slug),
        None => "/".to_string(),
    };

    let cookie = Cookie::build((PREVIEW_COOKIE, token))
        .path("/")
        .http_only(true)
        .build();

    tracing::info!(target = %target, "preview session opened");
    Ok((jar.add(cookie), Redirect::to(&target)))
}

/// End the preview session: clear the cookie and redirect home.
pub async fn exit_preview(jar: CookieJar) -> (CookieJar, Redirect) {
    let removal = Cookie::build(PREVIEW_COOKIE).path("/").build();
    tracing::info!("preview session closed");
    (jar.remove(removal), Redirect::to("/"))
}
