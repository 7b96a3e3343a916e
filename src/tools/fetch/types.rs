use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_REDIRECT_LIMIT: usize = 10;

/// Settings for the default blocking client.
///
/// The preview pipeline never times out on its own, so every client built
/// from this config carries a bounded `timeout_ms`.
///
/// # Examples
/// ```
/// use linkcard::tools::fetch::ClientConfig;
///
/// let cfg: ClientConfig = serde_json::from_str(r#"{"timeout_ms": 2500}"#).unwrap();
/// assert_eq!(cfg.timeout_ms, 2500);
/// assert_eq!(cfg.redirect_limit, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub timeout_ms: u64,
    pub redirect_limit: usize,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            redirect_limit: DEFAULT_REDIRECT_LIMIT,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// Status plus an unread body stream.
///
/// Dropping the value releases the body and the connection behind it.
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Box<dyn Read + Send>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Read + Send + 'static) -> Self {
        Self {
            status,
            body: Box::new(body),
        }
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
