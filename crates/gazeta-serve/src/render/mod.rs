//! HTML rendering for the blog pages.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic escaping of dynamic values. The only
//! pre-escaped injection is the rich-text body, which `gazeta-core` escapes
//! while folding blocks to HTML.

pub mod components;
pub mod home;
pub mod post;
