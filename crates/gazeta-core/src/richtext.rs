//! Structured rich text as delivered by the content repository.
//!
//! A post body is a sequence of [`ContentBlock`]s; each block pairs a
//! heading with rich-text nodes. Nodes carry raw text plus inline formatting
//! spans addressed by character offsets. Two reductions are provided:
//! plain text (for word counting) and HTML (for rendering), both as explicit
//! accumulator folds.

use serde::{Deserialize, Serialize};

/// One content block: a heading followed by its rich-text body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Section heading, rendered as `<h1>` above the body.
    pub heading: String,
    /// Ordered rich-text nodes.
    pub body: Vec<RichNode>,
}

/// Kind of a top-level rich-text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Regular paragraph.
    Paragraph,
    /// Preformatted text, rendered inside `<pre>`.
    Preformatted,
    /// Unordered list entry.
    ListItem,
    /// Ordered list entry.
    #[serde(rename = "o-list-item")]
    OListItem,
}

/// A single rich-text node: raw text plus inline formatting spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichNode {
    /// Node kind.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Raw text content, unescaped.
    pub text: String,
    /// Inline formatting, addressed by character offsets into `text`.
    #[serde(default)]
    pub spans: Vec<InlineSpan>,
}

/// Inline formatting applied to a character range of a node's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineSpan {
    /// First character covered by the span.
    pub start: usize,
    /// One past the last character covered.
    pub end: usize,
    /// What the span does.
    #[serde(flatten)]
    pub kind: SpanKind,
}

/// Supported inline formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SpanKind {
    /// Bold.
    Strong,
    /// Italic.
    Em,
    /// Link to an external URL.
    Hyperlink {
        /// Link target.
        data: LinkData,
    },
}

/// Target of a hyperlink span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkData {
    /// Destination URL, escaped before it reaches an attribute.
    pub url: String,
}

/// Reduce nodes to plain text, joining node texts with a single space.
///
/// Inline formatting is discarded. This is the input the reading-time
/// estimator tokenizes.
pub fn as_text(nodes: &[RichNode]) -> String {
    let mut out = String::new();
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&node.text);
    }
    out
}

/// Reduce nodes to an HTML fragment.
///
/// Consecutive list items of the same kind are grouped under one `<ul>` or
/// `<ol>`. All text content and link URLs are HTML-escaped; inline spans
/// become `<strong>`, `<em>`, and `<a>` elements.
pub fn as_html(nodes: &[RichNode]) -> String {
    let mut out = String::new();
    let mut i = 0;
    while i < nodes.len() {
        match nodes[i].kind {
            NodeKind::ListItem | NodeKind::OListItem => {
                let kind = nodes[i].kind;
                let (open, close) = if kind == NodeKind::ListItem {
                    ("<ul>", "</ul>")
                } else {
                    ("<ol>", "</ol>")
                };
                out.push_str(open);
                while i < nodes.len() && nodes[i].kind == kind {
                    out.push_str("<li>");
                    out.push_str(&inline_html(&nodes[i]));
                    out.push_str("</li>");
                    i += 1;
                }
                out.push_str(close);
            }
            NodeKind::Paragraph => {
                out.push_str("<p>");
                out.push_str(&inline_html(&nodes[i]));
                out.push_str("</p>");
                i += 1;
            }
            NodeKind::Preformatted => {
                out.push_str("<pre>");
                out.push_str(&inline_html(&nodes[i]));
                out.push_str("</pre>");
                i += 1;
            }
        }
    }
    out
}

/// Reduce content blocks to one HTML string: each block contributes its
/// heading as `<h1>` followed by its body fragment.
pub fn render_blocks_html(blocks: &[ContentBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push_str("<h1>");
        out.push_str(&escape_html(&block.heading));
        out.push_str("</h1>");
        out.push_str(&as_html(&block.body));
    }
    out
}

/// Render a node's text with its inline spans applied.
///
/// Spans are processed in `(start, end)` order. A span that overlaps an
/// earlier one, is empty, or reaches past the end of the text is skipped.
fn inline_html(node: &RichNode) -> String {
    let total = node.text.chars().count();

    let mut ordered: Vec<&InlineSpan> = node.spans.iter().collect();
    ordered.sort_by_key(|s| (s.start, s.end));

    let mut out = String::new();
    let mut cursor = 0usize;
    for span in ordered {
        if span.start < cursor || span.end <= span.start || span.end > total {
            continue;
        }
        out.push_str(&escape_html(char_slice(&node.text, cursor, span.start)));
        let inner = escape_html(char_slice(&node.text, span.start, span.end));
        match &span.kind {
            SpanKind::Strong => {
                out.push_str("<strong>");
                out.push_str(&inner);
                out.push_str("</strong>");
            }
            SpanKind::Em => {
                out.push_str("<em>");
                out.push_str(&inner);
                out.push_str("</em>");
            }
            SpanKind::Hyperlink { data } => {
                out.push_str("<a href=\"");
                out.push_str(&escape_html(&data.url));
                out.push_str("\">");
                out.push_str(&inner);
                out.push_str("</a>");
            }
        }
        cursor = span.end;
    }
    out.push_str(&escape_html(char_slice(&node.text, cursor, total)));
    out
}

/// Slice a string by character offsets.
fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let mut indices = text.char_indices().map(|(i, _)| i);
    let from = indices.clone().nth(start).unwrap_or(text.len());
    let to = indices.nth(end).unwrap_or(text.len());
    &text[from..to]
}

/// Escape text for inclusion in HTML content or attribute values.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
