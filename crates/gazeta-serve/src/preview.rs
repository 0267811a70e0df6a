//! Preview session handling.
//!
//! Editorial preview rides on a cookie holding the repository's preview ref.
//! While the cookie is present, content queries use that ref instead of the
//! master ref, so handlers see draft versions, and rendered pages bypass the
//! HTML cache. The session lives exactly as long as the cookie; there is no
//! server-side record of it.

use axum_extra::extract::cookie::CookieJar;

/// Name of the cookie carrying the preview ref.
pub const PREVIEW_COOKIE: &str = "gazeta_preview";

/// Preview state of one request, derived from the cookie jar.
#[derive(Debug, Clone, Default)]
pub struct PreviewSession(Option<String>);

impl PreviewSession {
    /// Read the preview state out of a request's cookies.
    pub fn from_jar(jar: &CookieJar) -> Self {
        let token = jar
            .get(PREVIEW_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty());
        Self(token)
    }

    /// Whether this request is part of a preview session.
    pub fn active(&self) -> bool {
        self.0.is_some()
    }

    /// The preview ref to query with, if any.
    pub fn ref_token(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::cookie::Cookie;

    use super::*;

    #[test]
    fn no_cookie_means_no_session() {
        let session = PreviewSession::from_jar(&CookieJar::new());
        assert!(!session.active());
        assert!(session.ref_token().is_none());
    }

    #[test]
    fn cookie_value_becomes_the_ref_token() {
        let jar = CookieJar::new().add(Cookie::new(PREVIEW_COOKIE, "preview-ref-123"));
        let session = PreviewSession::from_jar(&jar);
        assert!(session.active());
        assert_eq!(session.ref_token(), Some("preview-ref-123"));
    }

    #[test]
    fn empty_cookie_value_is_ignored() {
        let jar = CookieJar::new().add(Cookie::new(PREVIEW_COOKIE, ""));
        let session = PreviewSession::from_jar(&jar);
        assert!(!session.active());
    }

    #[test]
    fn unrelated_cookies_do_not_activate_preview() {
        let jar = CookieJar::new().add(Cookie::new("session_id", "abc"));
        let session = PreviewSession::from_jar(&jar);
        assert!(!session.active());
    }
}
