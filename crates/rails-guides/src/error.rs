use mcp_common::error::CommonError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("invalid guide {name:?}: {reason}")]
    Validation { name: String, reason: String },

    #[error("failed to fetch guide {guide}: {status}")]
    Fetch { guide: String, status: String },
}
