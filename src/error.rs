use thiserror::Error;

pub type Result<T> = std::result::Result<T, PreviewError>;

/// Uniform classification shared by every preview failure.
///
/// Callers that only need "preview unavailable" can match on this and ignore
/// the variant; the variant is there for logging and richer callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Internal,
}

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status: {0}")]
    BadStatus(String),

    #[error("failed to parse HTML: {0}")]
    Parse(String),
}

impl PreviewError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Internal
    }

    /// HTTP status a server surface should answer with.
    pub fn status_code(&self) -> u16 {
        500
    }
}

/* Conversions so `?` works smoothly */
impl From<url::ParseError> for PreviewError {
    fn from(e: url::ParseError) -> Self {
        PreviewError::InvalidUrl(e.to_string())
    }
}
impl From<reqwest::Error> for PreviewError {
    fn from(e: reqwest::Error) -> Self {
        PreviewError::Request(e.to_string())
    }
}
