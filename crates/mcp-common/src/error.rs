/// Error types shared across MCP server crates.
///
/// These errors represent failures in infrastructure components (outbound HTTP)
/// that are common to multiple MCP servers. Application-specific errors should be defined
/// in each server crate and wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned {status}: {reason}")]
    Upstream {
        status: reqwest::StatusCode,
        reason: String,
    },
}
