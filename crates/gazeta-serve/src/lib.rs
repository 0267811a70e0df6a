//! Gazeta Serve - server-rendered blog front-end over a headless content
//! repository.
//!
//! This crate is the HTTP face of the blog. Every page is rendered on the
//! server from content fetched over the repository's JSON API.
//!
//! # Architecture
//!
//! - **Cms**: content repository client; normalizes wire documents into the
//!   `gazeta-core` post types and implements its pagination seam
//! - **Render**: maud templates for the listing and detail pages, with
//!   automatic escaping of dynamic values
//! - **Preview**: editorial preview sessions carried by a cookie holding the
//!   repository's preview ref
//! - **Cache**: in-process moka cache of rendered pages plus CDN-oriented
//!   Cache-Control headers; the three freshest posts are pre-rendered at
//!   startup
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped (maud for markup, the core
//!   rich-text fold for post bodies)
//! - Banner URLs are validated (HTTPS/HTTP only) before use in attributes
//! - Strict Content-Security-Policy; only the comment widget's origin and
//!   the font host are allowed beyond inline assets

pub mod cms;
pub mod config;
pub mod error;
pub mod preview;
pub mod render;
pub mod routes;
pub mod state;

pub use cms::CmsClient;
pub use config::Config;
pub use error::ServeError;
pub use routes::router;
pub use state::AppState;
