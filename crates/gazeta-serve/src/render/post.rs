//! Post detail page markup.

use gazeta_core::richtext;
use gazeta_core::{AdjacentPost, PostDetail};
use maud::{Markup, PreEscaped, html};

use super::components::{
    ICON_CALENDAR, ICON_CLOCK, ICON_USER, comment_widget, exit_preview_button, is_safe_url,
    page_shell, site_header,
};
use crate::config::Config;

/// Render a post detail page.
pub fn render(
    post: &PostDetail,
    minutes_to_read: u32,
    previous: Option<&AdjacentPost>,
    next: Option<&AdjacentPost>,
    preview: bool,
    config: &Config,
) -> Markup {
    let title = format!("{} | {}", config.site_name, post.title);
    let content_html = richtext::render_blocks_html(&post.content);

    let body = html! {
        (site_header())

        @if is_safe_url(&post.banner_url) {
            div class="banner-box" {
                img src=(post.banner_url) alt=(post.title);
            }
        }

        div class="content-container post-container" {
            h1 { (post.title) }

            ul class="post-info" {
                li {
                    (PreEscaped(ICON_CALENDAR))
                    @if let Some(date) = &post.first_publication_date {
                        time { (date) }
                    }
                }
                li {
                    (PreEscaped(ICON_USER))
                    span { (post.author) }
                }
                li {
                    (PreEscaped(ICON_CLOCK))
                    span { (minutes_to_read) " min" }
                }
            }

            article class="post-content" {
                (PreEscaped(content_html))
            }

            footer class="post-footer" {
                div class="adjacent-posts" {
                    @if let Some(prev) = previous {
                        div class="adjacent-prev" {
                            p { (prev.title) }
                            a href=(prev.href) { "Post anterior" }
                        }
                    }
                    @if let Some(next) = next {
                        div class="adjacent-next" {
                            p { (next.title) }
                            a href=(next.href) { "Próximo Post" }
                        }
                    }
                }

                (comment_widget(&config.comments_repo, &config.comments_theme))

                @if preview {
                    (exit_preview_button())
                }
            }
        }
    };

    page_shell(&title, &post.subtitle, body)
}
