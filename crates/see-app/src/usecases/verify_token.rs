use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use see_client::{codes, ClientConfig, SeeClient, SeeError};
use see_core::ports::KvStorePort;
use see_core::Vertical;

use crate::settings::SettingsService;

/// Validates an API token against the live service and persists it.
///
/// The token is checked by listing the URL domains with it; nothing is
/// stored unless that call succeeds.
pub struct VerifyToken {
    settings: SettingsService,
    base_url: String,
}

impl VerifyToken {
    pub fn new(store: Arc<dyn KvStorePort>) -> Self {
        Self {
            settings: SettingsService::new(store),
            base_url: see_client::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the verification call at a non-default deployment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the URL domain list the verified token has access to.
    pub async fn execute(&self, token: &str) -> Result<Vec<String>> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SeeError::api(codes::INVALID_TOKEN, "API token cannot be empty").into());
        }

        let config = ClientConfig::new(token).with_base_url(self.base_url.as_str());
        let client = SeeClient::new(config)?;
        let response = client.list_url_domains().await?;
        let domains = response.data.domains;

        self.settings.save_api_key(token).await?;
        self.settings.save_domains(Vertical::Url, &domains).await?;

        info!(domains = domains.len(), "api token verified");
        Ok(domains)
    }
}
