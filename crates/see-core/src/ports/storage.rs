//! Storage port - a uniform async key-value interface with two scopes.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Replication tier of a persisted key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageScope {
    /// Follows the account across devices where the platform supports it.
    /// Small values only.
    Synced,
    /// Stays on the device that wrote it.
    Local,
}

/// Key-value persistence port.
///
/// Collection values are rewritten whole on every mutation; the port has no
/// partial-update primitive. Two surfaces writing the same key concurrently
/// resolve last-writer-wins, so mutations of one collection should be
/// funneled through a single owning surface.
#[async_trait]
pub trait KvStorePort: Send + Sync {
    async fn get(&self, scope: StorageScope, key: &str) -> Result<Option<Value>>;

    async fn put(&self, scope: StorageScope, key: &str, value: Value) -> Result<()>;

    async fn remove(&self, scope: StorageScope, key: &str) -> Result<()>;
}

/// Reads `key` and deserializes it into `T`. An absent key reads as `None`.
pub async fn get_value<T: DeserializeOwned>(
    store: &dyn KvStorePort,
    scope: StorageScope,
    key: &str,
) -> Result<Option<T>> {
    match store.get(scope, key).await? {
        Some(value) => {
            let typed = serde_json::from_value(value)
                .with_context(|| format!("stored value under {key} has an unexpected shape"))?;
            Ok(Some(typed))
        }
        None => Ok(None),
    }
}

/// Serializes `value` and writes it under `key`.
pub async fn put_value<T: Serialize + ?Sized>(
    store: &dyn KvStorePort,
    scope: StorageScope,
    key: &str,
    value: &T,
) -> Result<()> {
    let value = serde_json::to_value(value)
        .with_context(|| format!("value under {key} is not JSON-serializable"))?;
    store.put(scope, key, value).await
}
