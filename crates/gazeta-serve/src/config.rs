//! Application configuration loaded from environment variables.

use std::sync::Arc;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Base URL of the content repository API.
    pub cms_api_url: String,

    /// Optional access token for the content repository.
    pub cms_access_token: Option<Arc<str>>,

    /// Site name shown in page titles.
    pub site_name: String,

    /// Repository identifier the comment widget threads issues under.
    pub comments_repo: String,

    /// Comment widget color theme.
    pub comments_theme: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables have defaults for local development:
    /// - `GAZETA_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `CMS_API_URL`: Content repository API URL
    ///   (default: "http://localhost:9000/api/v2")
    /// - `CMS_ACCESS_TOKEN`: Repository access token (default: none)
    /// - `GAZETA_SITE_NAME`: Site name for titles (default: "Gazeta")
    /// - `GAZETA_COMMENTS_REPO`: Comment widget repository
    ///   (default: "gazeta-blog/gazeta-comments")
    /// - `GAZETA_COMMENTS_THEME`: Comment widget theme (default: "github-dark")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("GAZETA_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let cms_api_url = std::env::var("CMS_API_URL")
            .unwrap_or_else(|_| "http://localhost:9000/api/v2".to_string())
            .trim_end_matches('/')
            .to_string();

        let cms_access_token = std::env::var("CMS_ACCESS_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .map(Arc::from);

        let site_name =
            std::env::var("GAZETA_SITE_NAME").unwrap_or_else(|_| "Gazeta".to_string());

        let comments_repo = std::env::var("GAZETA_COMMENTS_REPO")
            .unwrap_or_else(|_| "gazeta-blog/gazeta-comments".to_string());

        let comments_theme = std::env::var("GAZETA_COMMENTS_THEME")
            .unwrap_or_else(|_| "github-dark".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            cms_api_url = %cms_api_url,
            has_access_token = cms_access_token.is_some(),
            site_name = %site_name,
            comments_repo = %comments_repo,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            cms_api_url,
            cms_access_token,
            site_name,
            comments_repo,
            comments_theme,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "GAZETA_BIND_ADDR",
        "CMS_API_URL",
        "CMS_ACCESS_TOKEN",
        "GAZETA_SITE_NAME",
        "GAZETA_COMMENTS_REPO",
        "GAZETA_COMMENTS_THEME",
    ];

    /// Helper to run config tests with isolated env vars.
    /// Uses a mutex to prevent concurrent env var races.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
            assert_eq!(config.cms_api_url, "http://localhost:9000/api/v2");
            assert!(config.cms_access_token.is_none());
            assert_eq!(config.site_name, "Gazeta");
            assert_eq!(config.comments_repo, "gazeta-blog/gazeta-comments");
            assert_eq!(config.comments_theme, "github-dark");
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("GAZETA_BIND_ADDR", "127.0.0.1:3000"),
                ("CMS_API_URL", "https://cms.example.com/api/v2"),
                ("CMS_ACCESS_TOKEN", "secret"),
                ("GAZETA_SITE_NAME", "Minha Gazeta"),
                ("GAZETA_COMMENTS_REPO", "someone/blog-comments"),
                ("GAZETA_COMMENTS_THEME", "github-light"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "127.0.0.1:3000");
                assert_eq!(config.cms_api_url, "https://cms.example.com/api/v2");
                assert_eq!(config.cms_access_token.as_deref(), Some("secret"));
                assert_eq!(config.site_name, "Minha Gazeta");
                assert_eq!(config.comments_repo, "someone/blog-comments");
                assert_eq!(config.comments_theme, "github-light");
            },
        );
    }

    #[test]
    fn config_api_url_trailing_slash_stripped() {
        with_env_vars(&[("CMS_API_URL", "https://cms.example.com/api/v2/")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.cms_api_url, "https://cms.example.com/api/v2");
        });
    }

    #[test]
    fn config_empty_access_token_is_none() {
        with_env_vars(&[("CMS_ACCESS_TOKEN", "")], || {
            let config = Config::from_env().unwrap();
            assert!(config.cms_access_token.is_none());
        });
    }
}
