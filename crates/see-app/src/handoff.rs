use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use see_core::keys;
use see_core::ports::{get_value, put_value, ClockPort, KvStorePort, StorageScope};

/// How long a handed-off QR target stays consumable.
pub const PENDING_QR_FRESHNESS_MS: i64 = 30_000;

/// Cross-surface handoff slot for "show this URL as a QR code".
///
/// One surface stores the URL with a timestamp, another picks it up on its
/// next open. Stale values are dropped on read so a popup opened much
/// later does not replay an old request.
pub struct PendingQr {
    store: Arc<dyn KvStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl PendingQr {
    pub fn new(store: Arc<dyn KvStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    pub async fn set(&self, url: &str) -> Result<()> {
        put_value(self.store.as_ref(), StorageScope::Local, keys::PENDING_QR, url).await?;
        put_value(
            self.store.as_ref(),
            StorageScope::Local,
            keys::PENDING_QR_TIMESTAMP,
            &self.clock.now_ms(),
        )
        .await
    }

    /// Empties the slot and returns the URL when it is still fresh.
    pub async fn take(&self) -> Result<Option<String>> {
        let url: Option<String> =
            get_value(self.store.as_ref(), StorageScope::Local, keys::PENDING_QR).await?;
        let stored_at: Option<i64> = get_value(
            self.store.as_ref(),
            StorageScope::Local,
            keys::PENDING_QR_TIMESTAMP,
        )
        .await?;

        self.store
            .remove(StorageScope::Local, keys::PENDING_QR)
            .await?;
        self.store
            .remove(StorageScope::Local, keys::PENDING_QR_TIMESTAMP)
            .await?;

        let (Some(url), Some(stored_at)) = (url, stored_at) else {
            return Ok(None);
        };
        let age = self.clock.now_ms() - stored_at;
        if age > PENDING_QR_FRESHNESS_MS {
            debug!(age_ms = age, "dropping stale pending QR target");
            return Ok(None);
        }
        Ok(Some(url))
    }
}
