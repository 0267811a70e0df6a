//! Content repository client.
//!
//! Speaks the repository's HTTP JSON API. The repository root exposes the
//! currently published ref; `documents/search` serves predicate queries and
//! paginated listings shaped as `{ "results": [...], "next_page": url|null }`.
//! Wire documents are normalized into the core post types here; nothing
//! outside this module sees the wire format.
//!
//! Every query runs against a ref: the master ref for published content, or
//! a preview ref (from the preview cookie) for drafts. The master ref is
//! looked up from the repository root and cached briefly.

use std::time::Duration;

use chrono::{DateTime, Utc};
use gazeta_core::richtext::ContentBlock;
use gazeta_core::{AdjacentPost, PageFetcher, PostDetail, PostPage, PostSummary, date};
use moka::future::Cache;
use serde::Deserialize;

use crate::error::ServeError;

/// Document type queried for every listing and lookup.
const POST_TYPE: &str = "post";

/// Posts per page on the listing route.
pub const LISTING_PAGE_SIZE: u8 = 5;

/// Posts pre-rendered into the HTML cache at startup.
pub const WARMUP_PAGE_SIZE: u8 = 3;

/// How long a master ref stays cached before it is re-read from the
/// repository root. Publishing rotates the ref, so this bounds how stale
/// published content can get between queries.
const MASTER_REF_TTL: Duration = Duration::from_secs(30);

/// Outbound request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolve a document to its route on this site.
pub fn link_resolver(doc_type: &str, uid: &str) -> String {
    if doc_type == POST_TYPE {
        format!("/post/{uid}")
    } else {
        "/".to_string()
    }
}

/// Client for the content repository API.
#[derive(Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    api_url: String,
    access_token: Option<std::sync::Arc<str>>,
    master_ref: Cache<&'static str, String>,
}

impl CmsClient {
    /// Create a client for the repository at `api_url`.
    pub fn new(api_url: &str, access_token: Option<std::sync::Arc<str>>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("gazeta/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let master_ref = Cache::builder()
            .max_capacity(1)
            .time_to_live(MASTER_REF_TTL)
            .build();

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            access_token,
            master_ref,
        })
    }

    /// The most recent posts, first publication date descending.
    pub async fn latest_posts(
        &self,
        page_size: u8,
        preview_ref: Option<&str>,
    ) -> Result<PostPage, ServeError> {
        let response = self
            .search(
                &type_predicate(),
                "[document.first_publication_date desc]",
                page_size,
                preview_ref,
            )
            .await?;
        Ok(response.into_page())
    }

    /// Resume a listing at an opaque `next_page` URL.
    ///
    /// The URL already carries the ref and query parameters of the listing
    /// it came from, so it is fetched as-is.
    pub async fn load_page(&self, url: &str) -> Result<PostPage, ServeError> {
        let response: SearchResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.into_page())
    }

    /// Fetch one post by its uid, or `None` if no such document exists.
    pub async fn get_by_uid(
        &self,
        uid: &str,
        preview_ref: Option<&str>,
    ) -> Result<Option<PostDetail>, ServeError> {
        let q = format!(
            r#"[[at(document.type,"{POST_TYPE}")][at(my.{POST_TYPE}.uid,"{uid}")]]"#
        );
        let response = self
            .search(&q, "[document.first_publication_date desc]", 1, preview_ref)
            .await?;
        Ok(response.results.into_iter().next().map(WireDocument::into_detail))
    }

    /// The post published soonest after `ts`, or `None` when `ts` belongs to
    /// the newest post. An empty result is expected, not an error.
    pub async fn first_after(
        &self,
        ts: DateTime<Utc>,
        preview_ref: Option<&str>,
    ) -> Result<Option<AdjacentPost>, ServeError> {
        let response = self
            .search(
                &date_predicate("dateAfter", ts),
                "[document.first_publication_date]",
                1,
                preview_ref,
            )
            .await?;
        Ok(response.results.into_iter().next().map(WireDocument::into_adjacent))
    }

    /// The post published soonest before `ts`, or `None` when `ts` belongs
    /// to the oldest post.
    pub async fn first_before(
        &self,
        ts: DateTime<Utc>,
        preview_ref: Option<&str>,
    ) -> Result<Option<AdjacentPost>, ServeError> {
        let response = self
            .search(
                &date_predicate("dateBefore", ts),
                "[document.first_publication_date desc]",
                1,
                preview_ref,
            )
            .await?;
        Ok(response.results.into_iter().next().map(WireDocument::into_adjacent))
    }

    /// Run a `documents/search` query against the resolved ref.
    async fn search(
        &self,
        q: &str,
        orderings: &str,
        page_size: u8,
        preview_ref: Option<&str>,
    ) -> Result<SearchResponse, ServeError> {
        let query_ref = match preview_ref {
            Some(token) => token.to_string(),
            None => self.resolve_master_ref().await?,
        };

        let page_size = page_size.to_string();
        let mut request = self.http.get(format!("{}/documents/search", self.api_url)).query(&[
            ("ref", query_ref.as_str()),
            ("q", q),
            ("orderings", orderings),
            ("pageSize", page_size.as_str()),
        ]);
        if let Some(token) = &self.access_token {
            request = request.query(&[("access_token", token.as_ref())]);
        }

        let response = request
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await?;
        Ok(response)
    }

    /// Look up the currently published ref, reusing a recent answer.
    async fn resolve_master_ref(&self) -> Result<String, ServeError> {
        if let Some(cached) = self.master_ref.get("master").await {
            return Ok(cached);
        }

        tracing::debug!("refreshing master ref");
        let mut request = self.http.get(&self.api_url);
        if let Some(token) = &self.access_token {
            request = request.query(&[("access_token", token.as_ref())]);
        }

        let root: ApiRoot = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let master = root
            .refs
            .into_iter()
            .find(|r| r.is_master)
            .map(|r| r.ref_id)
            .ok_or_else(|| {
                ServeError::Internal(anyhow::anyhow!("repository exposes no master ref"))
            })?;

        self.master_ref.insert("master", master.clone()).await;
        Ok(master)
    }
}

impl PageFetcher for CmsClient {
    type Error = ServeError;

    async fn fetch_page(&self, url: &str) -> Result<PostPage, ServeError> {
        self.load_page(url).await
    }
}

/// Predicate matching all post documents.
fn type_predicate() -> String {
    format!(r#"[[at(document.type,"{POST_TYPE}")]]"#)
}

/// Predicate matching posts on one side of a publication timestamp.
fn date_predicate(op: &str, ts: DateTime<Utc>) -> String {
    format!(
        r#"[[at(document.type,"{POST_TYPE}")][{op}(document.first_publication_date,{})]]"#,
        ts.timestamp_millis()
    )
}

// -- Wire format --

/// Repository root payload; only the refs matter here.
#[derive(Debug, Deserialize)]
struct ApiRoot {
    refs: Vec<ApiRef>,
}

/// One entry of the repository's ref list.
#[derive(Debug, Deserialize)]
struct ApiRef {
    #[serde(rename = "ref")]
    ref_id: String,
    #[serde(default, rename = "isMasterRef")]
    is_master: bool,
}

/// A `documents/search` response page.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<WireDocument>,
    #[serde(default)]
    next_page: Option<String>,
}

impl SearchResponse {
    fn into_page(self) -> PostPage {
        PostPage {
            results: self
                .results
                .into_iter()
                .map(WireDocument::into_summary)
                .collect(),
            next_page: self.next_page,
        }
    }
}

/// A post document as the repository serves it.
#[derive(Debug, Deserialize)]
struct WireDocument {
    uid: String,
    #[serde(default, rename = "type")]
    doc_type: String,
    #[serde(default)]
    first_publication_date: Option<DateTime<Utc>>,
    data: WireData,
}

/// The editable payload of a post document.
#[derive(Debug, Deserialize)]
struct WireData {
    title: String,
    #[serde(default)]
    subtitle: String,
    author: String,
    #[serde(default)]
    banner: Option<WireBanner>,
    #[serde(default)]
    content: Vec<ContentBlock>,
}

/// Banner image reference.
#[derive(Debug, Deserialize)]
struct WireBanner {
    url: String,
}

impl WireDocument {
    fn into_summary(self) -> PostSummary {
        PostSummary {
            uid: self.uid,
            first_publication_date: self.first_publication_date.map(date::format_display_date),
            title: self.data.title,
            subtitle: self.data.subtitle,
            author: self.data.author,
        }
    }

    fn into_detail(self) -> PostDetail {
        PostDetail {
            uid: self.uid,
            first_publication_date: self.first_publication_date.map(date::format_display_date),
            published_at: self.first_publication_date,
            title: self.data.title,
            subtitle: self.data.subtitle,
            author: self.data.author,
            banner_url: self.data.banner.map(|b| b.url).unwrap_or_default(),
            content: self.data.content,
        }
    }

    fn into_adjacent(self) -> AdjacentPost {
        let href = link_resolver(&self.doc_type, &self.uid);
        AdjacentPost {
            title: self.data.title,
            href,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const DOC_JSON: &str = r#"{
        "uid": "primeiro-post",
        "type": "post",
        "first_publication_date": "2021-04-19T10:30:00Z",
        "data": {
            "title": "Primeiro post",
            "subtitle": "Como tudo começou",
            "author": "Ana Lima",
            "banner": { "url": "https://images.example.com/banner.png" },
            "content": [
                {
                    "heading": "Intro",
                    "body": [
                        { "type": "paragraph", "text": "Hello world", "spans": [] }
                    ]
                }
            ]
        }
    }"#;

    // -- wire parsing --

    #[test]
    fn search_response_parses_next_page_url() {
        let json = format!(
            r#"{{"results":[{DOC_JSON}],"next_page":"https://cms.example.com/page/2"}}"#
        );
        let response: SearchResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(
            response.next_page.as_deref(),
            Some("https://cms.example.com/page/2")
        );
    }

    #[test]
    fn search_response_null_next_page_is_terminal() {
        let json = format!(r#"{{"results":[{DOC_JSON}],"next_page":null}}"#);
        let response: SearchResponse = serde_json::from_str(&json).unwrap();
        assert!(response.next_page.is_none());
    }

    #[test]
    fn search_response_missing_next_page_is_terminal() {
        let response: SearchResponse = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        assert!(response.next_page.is_none());
        assert!(response.results.is_empty());
    }

    #[test]
    fn api_root_finds_master_ref() {
        let json = r#"{"refs":[
            {"ref":"draft-ref","label":"Preview"},
            {"ref":"master-ref","isMasterRef":true}
        ]}"#;
        let root: ApiRoot = serde_json::from_str(json).unwrap();
        let master = root.refs.into_iter().find(|r| r.is_master).unwrap();
        assert_eq!(master.ref_id, "master-ref");
    }

    // -- normalization --

    #[test]
    fn document_normalizes_to_summary_with_display_date() {
        let doc: WireDocument = serde_json::from_str(DOC_JSON).unwrap();
        let summary = doc.into_summary();
        assert_eq!(summary.uid, "primeiro-post");
        assert_eq!(summary.first_publication_date.as_deref(), Some("19 abr 2021"));
        assert_eq!(summary.title, "Primeiro post");
        assert_eq!(summary.subtitle, "Como tudo começou");
        assert_eq!(summary.author, "Ana Lima");
    }

    #[test]
    fn document_normalizes_to_detail_with_raw_timestamp() {
        let doc: WireDocument = serde_json::from_str(DOC_JSON).unwrap();
        let detail = doc.into_detail();
        assert_eq!(detail.banner_url, "https://images.example.com/banner.png");
        assert_eq!(
            detail.published_at,
            Some(Utc.with_ymd_and_hms(2021, 4, 19, 10, 30, 0).unwrap())
        );
        assert_eq!(detail.content.len(), 1);
        assert_eq!(detail.content[0].heading, "Intro");
    }

    #[test]
    fn document_without_banner_gets_empty_url() {
        let json = r#"{
            "uid": "sem-banner",
            "type": "post",
            "first_publication_date": null,
            "data": { "title": "T", "author": "A" }
        }"#;
        let doc: WireDocument = serde_json::from_str(json).unwrap();
        let detail = doc.into_detail();
        assert_eq!(detail.banner_url, "");
        assert!(detail.first_publication_date.is_none());
        assert!(detail.published_at.is_none());
        assert!(detail.content.is_empty());
    }

    #[test]
    fn document_normalizes_to_adjacent_link() {
        let doc: WireDocument = serde_json::from_str(DOC_JSON).unwrap();
        let adjacent = doc.into_adjacent();
        assert_eq!(adjacent.title, "Primeiro post");
        assert_eq!(adjacent.href, "/post/primeiro-post");
    }

    // -- link_resolver() --

    #[test]
    fn link_resolver_posts_get_post_route() {
        assert_eq!(link_resolver("post", "meu-post"), "/post/meu-post");
    }

    #[test]
    fn link_resolver_other_types_fall_back_to_home() {
        assert_eq!(link_resolver("page", "sobre"), "/");
    }

    // -- predicates --

    #[test]
    fn type_predicate_filters_posts() {
        assert_eq!(type_predicate(), r#"[[at(document.type,"post")]]"#);
    }

    #[test]
    fn date_predicate_embeds_millis() {
        let ts = Utc.with_ymd_and_hms(2021, 4, 19, 0, 0, 0).unwrap();
        let predicate = date_predicate("dateAfter", ts);
        assert_eq!(
            predicate,
            format!(
                r#"[[at(document.type,"post")][dateAfter(document.first_publication_date,{})]]"#,
                ts.timestamp_millis()
            )
        );
    }
}
