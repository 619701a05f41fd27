use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use see_client::SeeClient;
use see_core::ports::KvStorePort;
use see_core::Vertical;

use crate::settings::SettingsService;

/// Fetches the domain list of one vertical and caches it in the synced
/// scope. The cache write is the point of the operation, so its failure
/// fails the call.
pub struct RefreshDomains {
    client: Arc<SeeClient>,
    settings: SettingsService,
}

impl RefreshDomains {
    pub fn new(client: Arc<SeeClient>, store: Arc<dyn KvStorePort>) -> Self {
        Self {
            client,
            settings: SettingsService::new(store),
        }
    }

    pub async fn execute(&self, vertical: Vertical) -> Result<Vec<String>> {
        let response = match vertical {
            Vertical::Url => self.client.list_url_domains().await?,
            Vertical::Text => self.client.list_text_domains().await?,
            Vertical::File => self.client.list_file_domains().await?,
        };
        let domains = response.data.domains;

        self.settings
            .save_domains(vertical, &domains)
            .await
            .with_context(|| format!("cache {vertical} domain list failed"))?;

        info!(vertical = %vertical, count = domains.len(), "domain list refreshed");
        Ok(domains)
    }
}
