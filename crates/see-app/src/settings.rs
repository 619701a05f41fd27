use std::sync::Arc;

use anyhow::Result;

use see_core::keys;
use see_core::ports::{get_value, put_value, KvStorePort, StorageScope};
use see_core::settings::{Theme, AUTO_COPY_DEFAULT};
use see_core::Vertical;

/// Typed accessors over the synced settings keys.
pub struct SettingsService {
    store: Arc<dyn KvStorePort>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn KvStorePort>) -> Self {
        Self { store }
    }

    pub async fn api_key(&self) -> Result<Option<String>> {
        get_value(self.store.as_ref(), StorageScope::Synced, keys::API_KEY).await
    }

    pub async fn save_api_key(&self, api_key: &str) -> Result<()> {
        put_value(
            self.store.as_ref(),
            StorageScope::Synced,
            keys::API_KEY,
            api_key,
        )
        .await
    }

    pub async fn remove_api_key(&self) -> Result<()> {
        self.store.remove(StorageScope::Synced, keys::API_KEY).await
    }

    /// Defaults to on when never set.
    pub async fn auto_copy(&self) -> Result<bool> {
        Ok(
            get_value(self.store.as_ref(), StorageScope::Synced, keys::AUTO_COPY)
                .await?
                .unwrap_or(AUTO_COPY_DEFAULT),
        )
    }

    pub async fn set_auto_copy(&self, auto_copy: bool) -> Result<()> {
        put_value(
            self.store.as_ref(),
            StorageScope::Synced,
            keys::AUTO_COPY,
            &auto_copy,
        )
        .await
    }

    pub async fn theme(&self) -> Result<Option<Theme>> {
        get_value(self.store.as_ref(), StorageScope::Synced, keys::THEME).await
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        put_value(self.store.as_ref(), StorageScope::Synced, keys::THEME, &theme).await
    }

    /// Cached domain list of one vertical, if it was ever fetched.
    pub async fn domains(&self, vertical: Vertical) -> Result<Option<Vec<String>>> {
        get_value(
            self.store.as_ref(),
            StorageScope::Synced,
            vertical.domains_key(),
        )
        .await
    }

    pub async fn save_domains(&self, vertical: Vertical, domains: &[String]) -> Result<()> {
        put_value(
            self.store.as_ref(),
            StorageScope::Synced,
            vertical.domains_key(),
            domains,
        )
        .await
    }

    /// The file vertical carries no default-domain slot and reads as `None`.
    pub async fn default_domain(&self, vertical: Vertical) -> Result<Option<String>> {
        let Some(key) = vertical.default_domain_key() else {
            return Ok(None);
        };
        get_value(self.store.as_ref(), StorageScope::Synced, key).await
    }

    pub async fn save_default_domain(&self, vertical: Vertical, domain: &str) -> Result<()> {
        if let Some(key) = vertical.default_domain_key() {
            put_value(self.store.as_ref(), StorageScope::Synced, key, domain).await?;
        }
        Ok(())
    }

    /// Forgets the account: api key, cached and default domains, and every
    /// history collection. Auto-copy and theme are device preferences and
    /// survive.
    pub async fn clear_all(&self) -> Result<()> {
        for key in keys::ACCOUNT_KEYS {
            self.store.remove(StorageScope::Synced, key).await?;
        }
        for key in keys::HISTORY_KEYS {
            self.store.remove(StorageScope::Local, key).await?;
        }
        Ok(())
    }
}
