use thiserror::Error;

pub type FetchResult<T> = Result<T, FetchError>;

/// Terminal failure kinds. Each variant maps onto a stable wire code that
/// ends up in the `error` field of the JSON object printed on failure.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(".gsc-config.json not found in {start_dir} or any parent directory")]
    ConfigNotFound { start_dir: String },

    #[error("missing required field(s) in .gsc-config.json:\n{details}")]
    ConfigIncomplete {
        missing: Vec<String>,
        details: String,
    },

    #[error("token refresh failed: {detail}")]
    TokenRefresh { detail: String },

    #[error("GSC API error: {detail}")]
    Api { detail: String },
}

impl FetchError {
    pub fn code(&self) -> &'static str {
        match self {
            FetchError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            FetchError::ConfigIncomplete { .. } => "CONFIG_INCOMPLETE",
            FetchError::TokenRefresh { .. } => "TOKEN_REFRESH_FAILED",
            FetchError::Api { .. } => "GSC_API_ERROR",
        }
    }
}
