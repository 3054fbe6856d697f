use thiserror::Error;

/// Errors returned by the Custom Search client.
#[derive(Debug, Error)]
pub enum CustomSearchError {
    /// Transport-level failure: DNS, TLS, connect, or reading the body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the API, with whatever body it sent.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

impl CustomSearchError {
    /// Whether the error points at bad credentials or a bad search-context
    /// id rather than a transient outage. Retrying these never helps.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CustomSearchError::Api {
                status: 400 | 401 | 403,
                ..
            }
        )
    }
}

pub type Result<T> = std::result::Result<T, CustomSearchError>;
