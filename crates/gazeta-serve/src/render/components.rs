//! Shared HTML components used across all pages.
//!
//! These are maud functions returning `Markup` fragments for composition
//! into full pages, plus the inline CSS and security header constants.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline CSS for all pages. Dark editorial theme, single accent color.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#1a1d23;--surface:#252831;--fg:#f8f8f8;--fg2:#c4c4cc;--fg3:#8a8a96;--accent:#ff57b2;--border:rgba(255,87,178,.18)}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh}
a{color:inherit;text-decoration:none}
img{max-width:100%}
svg.icon{width:20px;height:20px;stroke:var(--fg3);fill:none;stroke-width:2;stroke-linecap:round;stroke-linejoin:round;vertical-align:-4px;flex-shrink:0}

.content-container{max-width:720px;margin:0 auto;padding:0 1.5rem}
.header-box{max-width:720px;margin:0 auto;padding:2.5rem 1.5rem}
.logo{font-size:1.6rem;font-weight:800;letter-spacing:-.03em;color:var(--fg)}
.logo-dot{color:var(--accent)}

.home-container{padding-top:3rem;padding-bottom:4rem}
.post-card{display:block;margin-bottom:3rem}
.post-card h1{font-size:1.75rem;font-weight:700;line-height:1.3;letter-spacing:-.01em}
.post-card h1:hover{color:var(--accent)}
.post-card p{color:var(--fg2);margin-top:.35rem;font-size:1.05rem}
.post-info{display:flex;gap:1.5rem;margin-top:.9rem;font-size:.9rem;color:var(--fg3);list-style:none}
.post-info li,.post-info div{display:flex;align-items:center;gap:.45rem}
.load-more{display:inline-block;margin-top:.5rem;color:var(--accent);font-weight:700;font-size:1.05rem}
.load-more:hover{text-decoration:underline}

.banner-box{width:100%;max-height:400px;overflow:hidden}
.banner-box img{width:100%;height:400px;object-fit:cover;display:block}
.post-container{padding-top:3rem;padding-bottom:4rem}
.post-container>h1{font-size:2.25rem;font-weight:700;line-height:1.25;letter-spacing:-.02em}
.post-content{margin-top:2.5rem;font-size:1.1rem;color:var(--fg2)}
.post-content h1{font-size:1.6rem;color:var(--fg);margin:2rem 0 1rem;letter-spacing:-.01em}
.post-content p{margin:1rem 0}
.post-content pre{background:var(--surface);border:1px solid var(--border);border-radius:6px;padding:1rem;overflow-x:auto;margin:1rem 0;font-size:.9rem}
.post-content ul,.post-content ol{margin:1rem 0;padding-left:1.5rem}
.post-content li{margin:.3rem 0}
.post-content a{color:var(--accent)}
.post-content a:hover{text-decoration:underline}
.post-content strong{color:var(--fg)}

.post-footer{margin-top:3.5rem;padding-top:1.5rem;border-top:1px solid var(--border)}
.adjacent-posts{display:flex;justify-content:space-between;gap:1rem;margin-bottom:2.5rem}
.adjacent-posts>div{max-width:45%}
.adjacent-next{margin-left:auto;text-align:right}
.adjacent-posts p{font-weight:600;color:var(--fg);overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.adjacent-posts a{color:var(--accent);font-size:.95rem}
.adjacent-posts a:hover{text-decoration:underline}

.exit-preview{display:block;margin:2.5rem auto 0;padding:.75rem 1.5rem;background:var(--accent);color:#1a1d23;border:none;border-radius:24px;font-weight:700;font-size:.95rem;cursor:pointer}
.exit-preview:hover{filter:brightness(1.1)}

#comments{margin-top:2.5rem}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#1a1d23;color:#f8f8f8;padding:1rem}
.error-page{text-align:center;max-width:420px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#8a8a96;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#ff57b2}
"#;

/// Content-Security-Policy header value.
///
/// Allows inline styles/scripts (page CSS, the exit-preview helper, the
/// comment-widget injector), the comment widget's script and iframe origin,
/// and the hosted font stylesheets. No other script sources.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline' https://fonts.googleapis.com https://utteranc.es; font-src https://fonts.gstatic.com; script-src 'unsafe-inline' https://utteranc.es; frame-src https://utteranc.es; img-src https: data:; connect-src 'self'; form-action 'none'; frame-ancestors 'none'";

/// Render the full HTML page shell with `<head>` and body content.
pub fn page_shell(title: &str, description: &str, body_content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);

                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap" rel="stylesheet";

                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (body_content)
            }
        }
    }
}

/// The site wordmark.
pub fn site_logo() -> Markup {
    html! {
        span class="logo" { "gazeta" span class="logo-dot" { "." } }
    }
}

/// Site header with the wordmark linking home. Shown on detail pages.
pub fn site_header() -> Markup {
    html! {
        div class="header-box" {
            a href="/" { (site_logo()) }
        }
    }
}

// -- Feather icon SVGs (stroke variants) --

/// Calendar icon.
pub const ICON_CALENDAR: &str = r#"<svg class="icon" viewBox="0 0 24 24"><rect x="3" y="4" width="18" height="18" rx="2" ry="2"/><line x1="16" y1="2" x2="16" y2="6"/><line x1="8" y1="2" x2="8" y2="6"/><line x1="3" y1="10" x2="21" y2="10"/></svg>"#;

/// User icon.
pub const ICON_USER: &str = r#"<svg class="icon" viewBox="0 0 24 24"><path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/></svg>"#;

/// Clock icon.
pub const ICON_CLOCK: &str = r#"<svg class="icon" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/></svg>"#;

/// Exit-preview helper: fetches the exit endpoint and reloads at the
/// redirected URL. Success is HTTP 200 combined with the redirect flag;
/// anything else is reported on the console without reloading.
const EXIT_PREVIEW_JS: &str = r#"async function exitPreview(){try{const r=await fetch('/api/exit-preview');if(r.status===200&&r.redirected){window.location.href=r.url}else{console.error('Erro ao sair do modo Preview')}}catch(e){console.error(e)}}"#;

/// Button shown while a preview session is active.
pub fn exit_preview_button() -> Markup {
    html! {
        script { (PreEscaped(EXIT_PREVIEW_JS)) }
        button class="exit-preview" onclick="exitPreview()" {
            "Sair do modo Preview"
        }
    }
}

/// Comment widget embed: an anchor node plus the injector that appends the
/// third-party script element to it, threaded by page path.
pub fn comment_widget(repo: &str, theme: &str) -> Markup {
    let injector = format!(
        r#"(function(){{var a=document.getElementById("comments");var s=document.createElement("script");s.src="https://utteranc.es/client.js";s.crossOrigin="anonymous";s.async=true;s.setAttribute("repo","{repo}");s.setAttribute("issue-term","pathname");s.setAttribute("theme","{theme}");a.appendChild(s);}})();"#
    );
    html! {
        section id="comments" {}
        script { (PreEscaped(injector)) }
    }
}

/// Check if a URL is safe to use in `src` or `href` attributes.
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
