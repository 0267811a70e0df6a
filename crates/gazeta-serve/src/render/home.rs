//! Listing page markup.

use gazeta_core::PostSummary;
use maud::{Markup, PreEscaped, html};

use super::components::{
    ICON_CALENDAR, ICON_USER, exit_preview_button, page_shell, site_logo,
};

/// Render the listing page.
///
/// `load_more_href` is the route that loads one more page of posts; `None`
/// once the listing is exhausted, which hides the control entirely.
pub fn render(
    posts: &[PostSummary],
    load_more_href: Option<&str>,
    preview: bool,
    site_name: &str,
) -> Markup {
    let title = format!("{site_name} | Home");

    let body = html! {
        div class="content-container home-container" {
            a href="/" { (site_logo()) }

            @for post in posts {
                a class="post-card" href={ "/post/" (post.uid) } {
                    h1 { (post.title) }
                    p { (post.subtitle) }
                    div class="post-info" {
                        div {
                            (PreEscaped(ICON_CALENDAR))
                            @if let Some(date) = &post.first_publication_date {
                                time { (date) }
                            }
                        }
                        div {
                            (PreEscaped(ICON_USER))
                            span { (post.author) }
                        }
                    }
                }
            }

            @if let Some(href) = load_more_href {
                a class="load-more" href=(href) { "Carregar mais posts" }
            }

            @if preview {
                (exit_preview_button())
            }
        }
    };

    page_shell(&title, "Últimos posts da Gazeta", body)
}
