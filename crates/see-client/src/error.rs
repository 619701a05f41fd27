use thiserror::Error;

/// Error codes shared by client-side validation and the server's error
/// bodies. Callers cannot tell which layer attached a code.
pub mod codes {
    /// Sentinel used when a non-2xx response carries no parseable code.
    pub const API_ERROR: &str = "API_ERROR";
    pub const INVALID_URL: &str = "INVALID_URL";
    pub const INVALID_CONTENT: &str = "INVALID_CONTENT";
    pub const INVALID_TITLE: &str = "INVALID_TITLE";
    pub const INVALID_TOKEN: &str = "INVALID_TOKEN";
}

pub type ClientResult<T> = std::result::Result<T, SeeError>;

/// Failure taxonomy of every SDK call. None of these are retried by the
/// client; retry policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeeError {
    /// Rejected input or a server-reported failure, carrying the wire code.
    #[error("{message}")]
    Api { code: String, message: String },

    /// The per-request timer elapsed before the server answered.
    #[error("request timed out")]
    Timeout,

    /// Transport-level failure below the HTTP layer.
    #[error("network error: {0}")]
    Network(String),
}

impl SeeError {
    pub fn api(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Wire code, when one is attached.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SeeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(error.to_string())
        }
    }
}
