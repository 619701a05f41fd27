use serde::{Deserialize, Serialize};

use super::Envelope;

/// Request body for `POST /api/v1/shorten`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlShortenRequest {
    pub domain: String,
    pub target_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Unix timestamp after which the link expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<i64>,
}

impl UrlShortenRequest {
    pub fn new(domain: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            target_url: target_url.into(),
            ..Self::default()
        }
    }
}

/// Payload returned by both the shorten and the text-share endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortLinkData {
    pub short_url: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_slug: Option<String>,
}

pub type UrlShortenResponse = Envelope<ShortLinkData>;
