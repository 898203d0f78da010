use regex::Regex;
use tracing::warn;

use mcp_common::http::HttpClientConfig;

pub const PROJECT_NAME: &str = "rails-guides-mcp";
/// Version served when none (or an invalid one) is configured. Also the latest
/// version, which lives at the unversioned root.
pub const DEFAULT_RAILS_VERSION: &str = "8.0";
pub const GUIDES_ROOT_URL: &str = "https://guides.rubyonrails.org";

const VERSION_ENV_VARS: [&str; 2] = ["RAILS_VERSION", "RAILS_GUIDES_VERSION"];
const HTTP_ENV_PREFIX: &str = "RAILS_GUIDES";

/// Application configuration resolved once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub project_name: String,
    /// Rails version, always `major.minor`.
    pub version: String,
    /// Root all guide URLs hang off, without a trailing slash.
    pub base_url: String,
    pub http: HttpClientConfig,
}

impl Config {
    /// Optional:
    /// - `RAILS_VERSION` / `RAILS_GUIDES_VERSION`: guides version (first set wins, default "8.0")
    /// - `RAILS_GUIDES_USER_AGENT`: outbound User-Agent
    /// - `RAILS_GUIDES_HTTP_TIMEOUT_SECS`: per-request timeout (default: none)
    pub fn from_env() -> Self {
        let requested = requested_version(|name| std::env::var(name).ok());
        let version = resolve_version(requested.as_deref());
        let http = HttpClientConfig::from_env(HTTP_ENV_PREFIX, &default_user_agent());
        Self::for_version(&version).with_http(http)
    }

    /// Config for an already validated version against the public guides site.
    pub fn for_version(version: &str) -> Self {
        Self {
            project_name: PROJECT_NAME.to_string(),
            version: version.to_string(),
            base_url: base_url(version),
            http: HttpClientConfig::new(default_user_agent()),
        }
    }

    /// Point guide URLs at another host, e.g. a mirror.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_http(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }
}

/// First non-empty value among the version variables, in precedence order.
fn requested_version(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    VERSION_ENV_VARS
        .iter()
        .find_map(|&name| lookup(name).filter(|v| !v.is_empty()))
}

/// Validate a requested version, falling back to the default with a warning.
pub fn resolve_version(requested: Option<&str>) -> String {
    let Some(requested) = requested else {
        return DEFAULT_RAILS_VERSION.to_string();
    };

    let version_re = Regex::new(r"^[0-9]+\.[0-9]+$").expect("valid regex");
    if version_re.is_match(requested) {
        return requested.to_string();
    }

    warn!(
        requested,
        "invalid RAILS_VERSION format: {requested}, using default {DEFAULT_RAILS_VERSION}"
    );
    DEFAULT_RAILS_VERSION.to_string()
}

/// The latest version is served from the root; older ones under `/v{version}`.
pub fn base_url(version: &str) -> String {
    if version == DEFAULT_RAILS_VERSION {
        GUIDES_ROOT_URL.to_string()
    } else {
        format!("{GUIDES_ROOT_URL}/v{version}")
    }
}

fn default_user_agent() -> String {
    format!("{PROJECT_NAME}/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_version_uses_root() {
        assert_eq!(base_url("8.0"), "https://guides.rubyonrails.org");
    }

    #[test]
    fn older_versions_use_versioned_path() {
        for v in ["7.1", "6.0", "4.2", "10.12"] {
            assert_eq!(base_url(v), format!("https://guides.rubyonrails.org/v{v}"));
        }
    }

    #[test]
    fn valid_version_is_kept() {
        assert_eq!(resolve_version(Some("7.1")), "7.1");
        assert_eq!(resolve_version(Some("12.34")), "12.34");
    }

    #[test]
    fn missing_or_invalid_version_falls_back() {
        assert_eq!(resolve_version(None), "8.0");
        for bad in ["7", "7.1.2", "v7.1", "latest", " 7.1", "7.x"] {
            assert_eq!(resolve_version(Some(bad)), "8.0", "input {bad:?}");
        }
    }

    #[test]
    fn rails_version_takes_precedence() {
        let both = |name: &str| match name {
            "RAILS_VERSION" => Some("7.0".to_string()),
            "RAILS_GUIDES_VERSION" => Some("6.1".to_string()),
            _ => None,
        };
        assert_eq!(requested_version(both).as_deref(), Some("7.0"));

        let fallback = |name: &str| match name {
            "RAILS_VERSION" => Some(String::new()),
            "RAILS_GUIDES_VERSION" => Some("6.1".to_string()),
            _ => None,
        };
        assert_eq!(requested_version(fallback).as_deref(), Some("6.1"));

        assert_eq!(requested_version(|_| None), None);
    }

    #[test]
    fn for_version_derives_urls() {
        let config = Config::for_version("7.2");
        assert_eq!(config.project_name, "rails-guides-mcp");
        assert_eq!(config.version, "7.2");
        assert_eq!(config.base_url, "https://guides.rubyonrails.org/v7.2");
        assert!(config.http.timeout.is_none());
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let config = Config::for_version("8.0").with_base_url("http://127.0.0.1:9000/");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.version, "8.0");
    }
}
