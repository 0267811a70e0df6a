//! Normalized post records as consumed by the renderers.
//!
//! These are the shapes the rest of the system works with; the CMS wire
//! format is translated into them by the content client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::richtext::ContentBlock;

/// A post as it appears on the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Opaque document identifier, doubles as the URL slug.
    pub uid: String,
    /// Publication date formatted for display (`dd MMM yyyy`), if the
    /// document carries one.
    pub first_publication_date: Option<String>,
    /// Post title.
    pub title: String,
    /// Subtitle shown under the title on the listing.
    pub subtitle: String,
    /// Author display name.
    pub author: String,
}

/// A fully loaded post for the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    /// Opaque document identifier, doubles as the URL slug.
    pub uid: String,
    /// Publication date formatted for display.
    pub first_publication_date: Option<String>,
    /// Raw publication timestamp, used for adjacent-post lookups. Display
    /// never uses this directly.
    pub published_at: Option<DateTime<Utc>>,
    /// Post title.
    pub title: String,
    /// Subtitle.
    pub subtitle: String,
    /// Author display name.
    pub author: String,
    /// Banner image URL.
    pub banner_url: String,
    /// Ordered content blocks (heading + rich-text body).
    pub content: Vec<ContentBlock>,
}

/// One page of a paginated post listing.
///
/// `next_page` is an opaque absolute URL naming the following batch; `None`
/// means the listing is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    /// Summaries in server order (first publication date, descending).
    pub results: Vec<PostSummary>,
    /// Cursor for the next batch, absent on the last page.
    pub next_page: Option<String>,
}

/// Title and link of a neighboring post, shown in the detail page footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacentPost {
    /// Title of the neighboring post.
    pub title: String,
    /// Resolved route to it (e.g. `/post/{uid}`).
    pub href: String,
}
