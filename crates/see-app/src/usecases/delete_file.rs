use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use see_client::SeeClient;
use see_core::api::FileDeleteResponse;
use see_core::history::{FileHistoryItem, HistoryVariant};
use see_core::ids::HistoryId;
use see_core::ports::{ClockPort, KvStorePort};

use crate::history::HistoryStore;

/// Deletes an uploaded file remotely, then drops matching history entries.
///
/// The remote call decides success; the history sweep afterwards is
/// bookkeeping and never fails the action.
pub struct DeleteFile {
    client: Arc<SeeClient>,
    history: HistoryStore<FileHistoryItem>,
}

impl DeleteFile {
    pub fn new(
        client: Arc<SeeClient>,
        store: Arc<dyn KvStorePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            client,
            history: HistoryStore::new(store, clock),
        }
    }

    pub async fn execute(&self, hash: &str) -> Result<FileDeleteResponse> {
        let response = self.client.delete_file(hash).await?;

        match self.history.all().await {
            Ok(items) => {
                let ids: Vec<HistoryId> = items
                    .iter()
                    .filter(|item| item.delete_hash == hash)
                    .map(|item| item.id().clone())
                    .collect();
                if !ids.is_empty() {
                    if let Err(err) = self.history.delete_many(&ids).await {
                        warn!("failed to drop deleted file from history: {err:#}");
                    }
                }
            }
            Err(err) => warn!("failed to read file history: {err:#}"),
        }

        info!(hash, "file deleted");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Server;
    use see_client::{ClientConfig, SeeClient, SeeError};
    use see_core::history::NewFileUpload;
    use see_infra::{MemoryKvStore, SystemClock};
    use serde_json::json;

    use super::*;

    fn client(base_url: &str) -> Arc<SeeClient> {
        Arc::new(SeeClient::new(ClientConfig::new("tok").with_base_url(base_url)).unwrap())
    }

    fn upload(hash: &str) -> NewFileUpload {
        NewFileUpload {
            filename: format!("{hash}.txt"),
            url: format!("https://s.ee/f/{hash}"),
            page_url: format!("https://s.ee/p/{hash}"),
            size: 1,
            delete_hash: hash.to_string(),
        }
    }

    #[tokio::test]
    async fn remote_delete_sweeps_the_matching_entry() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/file/delete/h2")
            .with_status(200)
            .with_body(json!({ "success": true, "code": 0, "message": "deleted" }).to_string())
            .create_async()
            .await;

        let store = Arc::new(MemoryKvStore::new());
        let history = HistoryStore::<FileHistoryItem>::new(store.clone(), Arc::new(SystemClock));
        history.add(upload("h1")).await.unwrap();
        history.add(upload("h2")).await.unwrap();

        let usecase = DeleteFile::new(client(&server.url()), store, Arc::new(SystemClock));
        let response = usecase.execute("h2").await.unwrap();

        mock.assert_async().await;
        assert!(response.success);
        let items = history.all().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].delete_hash, "h1");
    }

    #[tokio::test]
    async fn remote_failure_keeps_history_intact() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v1/file/delete/h1")
            .with_status(404)
            .with_body(json!({ "code": "NOT_FOUND", "message": "unknown hash" }).to_string())
            .create_async()
            .await;

        let store = Arc::new(MemoryKvStore::new());
        let history = HistoryStore::<FileHistoryItem>::new(store.clone(), Arc::new(SystemClock));
        history.add(upload("h1")).await.unwrap();

        let usecase = DeleteFile::new(client(&server.url()), store, Arc::new(SystemClock));
        let err = usecase.execute("h1").await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<SeeError>().and_then(SeeError::code),
            Some("NOT_FOUND")
        );
        assert_eq!(history.all().await.unwrap().len(), 1);
    }
}
