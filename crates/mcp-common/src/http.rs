/// Plain-text HTTP GET client for servers that proxy remote documents.
///
/// One request per call: no retries, no caching. A non-2xx reply becomes
/// `CommonError::Upstream` carrying the status and its canonical reason phrase.
use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::error::CommonError;

#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    pub user_agent: String,
    /// `None` leaves the request unbounded.
    pub timeout: Option<Duration>,
}

impl HttpClientConfig {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout: None,
        }
    }

    /// Reads `{prefix}_USER_AGENT` and `{prefix}_HTTP_TIMEOUT_SECS`.
    ///
    /// Unset or unparsable values keep the defaults: the given user agent and no timeout.
    pub fn from_env(prefix: &str, default_user_agent: &str) -> Self {
        let user_agent = std::env::var(format!("{prefix}_USER_AGENT"))
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| default_user_agent.to_string());

        let timeout = std::env::var(format!("{prefix}_HTTP_TIMEOUT_SECS"))
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&n| n > 0)
            .map(Duration::from_secs);

        Self {
            user_agent,
            timeout,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HttpClient {
    config: HttpClientConfig,
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, CommonError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// GET `url` and return the full body as text.
    pub async fn get_text(&self, url: &str) -> Result<String, CommonError> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        debug!(url, status = status.as_u16(), "upstream responded");

        if !status.is_success() {
            return Err(CommonError::Upstream {
                status,
                reason: status_text(status),
            });
        }

        Ok(resp.text().await?)
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown Status")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_text_returns_body_verbatim() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/page.html"))
            .respond_with(
                wiremock::ResponseTemplate::new(200).set_body_string("<html><h1>Hi</h1></html>"),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new(HttpClientConfig::new("test-agent")).unwrap();
        let body = client
            .get_text(&format!("{}/page.html", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html><h1>Hi</h1></html>");
    }

    #[tokio::test]
    async fn non_success_status_is_upstream_error() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = HttpClient::new(HttpClientConfig::new("test-agent")).unwrap();
        let err = client
            .get_text(&format!("{}/missing.html", server.uri()))
            .await
            .unwrap_err();

        match err {
            CommonError::Upstream { status, reason } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(reason, "Not Found");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn sends_configured_user_agent() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::header("user-agent", "guides-test/1.0"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let client = HttpClient::new(HttpClientConfig::new("guides-test/1.0")).unwrap();
        let body = client.get_text(&server.uri()).await.unwrap();
        assert_eq!(body, "ok");
    }

    #[test]
    fn config_defaults_to_no_timeout() {
        let config = HttpClientConfig::from_env("MCP_COMMON_TEST_UNSET", "agent/0");
        assert_eq!(config.user_agent, "agent/0");
        assert!(config.timeout.is_none());
    }
}
