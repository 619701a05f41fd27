use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://s.ee";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration owned by one [`crate::SeeClient`] instance. Only mutable
/// through the client's explicit setters.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Raw API key, sent as the `Authorization` header without a scheme
    /// prefix.
    pub api_key: String,
    /// Budget for one request; every call gets a fresh window.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Points the client at a non-default deployment. An empty string
    /// keeps the default.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = normalize_base_url(base_url.into());
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Trims whitespace and trailing slashes. `None` when nothing is left.
pub(crate) fn normalize_base_url(base_url: String) -> Option<String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_url_keeps_the_default() {
        let config = ClientConfig::new("key").with_base_url("");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = ClientConfig::new("key").with_base_url("https://example.org/");
        assert_eq!(config.base_url, "https://example.org");
    }
}
