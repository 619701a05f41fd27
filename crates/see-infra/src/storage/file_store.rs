use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use see_core::ports::{KvStorePort, StorageScope};

/// JSON-file-backed store, one document per scope.
///
/// Writes go through a temp-file rename so a crash leaves either the old or
/// the new contents on disk. The internal lock serializes writers within
/// this process only; separate processes sharing the directory still race,
/// last writer wins.
pub struct FileKvStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKvStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Roots the store in the platform data directory, e.g.
    /// `~/.local/share/<app>` on Linux.
    pub fn in_data_dir(app: &str) -> Result<Self> {
        let base = dirs::data_dir().context("no platform data directory available")?;
        Ok(Self::new(base.join(app)))
    }

    fn scope_path(&self, scope: StorageScope) -> PathBuf {
        let file = match scope {
            StorageScope::Synced => "synced.json",
            StorageScope::Local => "local.json",
        };
        self.dir.join(file)
    }

    async fn load(&self, scope: StorageScope) -> Result<Map<String, Value>> {
        let path = self.scope_path(scope);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("read store file failed: {}", path.display()))
            }
        };
        serde_json::from_slice(&bytes)
            .with_context(|| format!("store file is not a JSON object: {}", path.display()))
    }

    async fn persist(&self, scope: StorageScope, map: &Map<String, Value>) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create store dir failed: {}", self.dir.display()))?;

        let path = self.scope_path(scope);
        let tmp_path = path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(map).context("encode store file failed")?;
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp store file failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &path).await.with_context(|| {
            format!(
                "rename temp store file failed: {} -> {}",
                tmp_path.display(),
                path.display()
            )
        })?;
        debug!(path = %path.display(), "store file written");
        Ok(())
    }
}

#[async_trait]
impl KvStorePort for FileKvStore {
    async fn get(&self, scope: StorageScope, key: &str) -> Result<Option<Value>> {
        Ok(self.load(scope).await?.get(key).cloned())
    }

    async fn put(&self, scope: StorageScope, key: &str, value: Value) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load(scope).await?;
        map.insert(key.to_string(), value);
        self.persist(scope, &map).await
    }

    async fn remove(&self, scope: StorageScope, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load(scope).await?;
        if map.remove(key).is_some() {
            self.persist(scope, &map).await?;
        }
        Ok(())
    }
}
