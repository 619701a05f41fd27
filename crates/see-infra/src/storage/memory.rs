use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use see_core::ports::{KvStorePort, StorageScope};

/// Volatile store backing tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryKvStore {
    synced: Mutex<HashMap<String, Value>>,
    local: Mutex<HashMap<String, Value>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, scope: StorageScope) -> &Mutex<HashMap<String, Value>> {
        match scope {
            StorageScope::Synced => &self.synced,
            StorageScope::Local => &self.local,
        }
    }
}

#[async_trait]
impl KvStorePort for MemoryKvStore {
    async fn get(&self, scope: StorageScope, key: &str) -> Result<Option<Value>> {
        Ok(self.map(scope).lock().await.get(key).cloned())
    }

    async fn put(&self, scope: StorageScope, key: &str, value: Value) -> Result<()> {
        self.map(scope).lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, scope: StorageScope, key: &str) -> Result<()> {
        self.map(scope).lock().await.remove(key);
        Ok(())
    }
}
