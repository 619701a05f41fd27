use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use see_client::SeeClient;
use see_core::api::{FilePayload, FileUploadData};
use see_core::history::{FileHistoryItem, NewFileUpload};
use see_core::ports::{ClockPort, KvStorePort};

use crate::history::HistoryStore;

/// Outcome of one file in a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadStatus {
    Uploaded(FileUploadData),
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadReport {
    pub filename: String,
    pub status: UploadStatus,
}

impl UploadReport {
    pub fn succeeded(&self) -> bool {
        matches!(self.status, UploadStatus::Uploaded(_))
    }
}

/// Uploads a batch of files one at a time.
///
/// Requests stay strictly sequential to bound server load. Every file gets
/// its own timeout window, and one failure never aborts the rest; the
/// report list always has one entry per input file, in order. History
/// receives entries only for files that made it.
pub struct UploadFiles {
    client: Arc<SeeClient>,
    history: HistoryStore<FileHistoryItem>,
}

impl UploadFiles {
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

    pub async fn execute(&self, files: Vec<FilePayload>) -> Result<Vec<UploadReport>> {
        let mut reports = Vec::with_capacity(files.len());
        for file in files {
            let filename = file.filename.clone();
            match self.client.upload_file(file).await {
                Ok(response) => {
                    let data = response.data;
                    let record = NewFileUpload {
                        filename: filename.clone(),
                        url: data.url.clone(),
                        page_url: data.page.clone(),
                        size: data.size,
                        delete_hash: data.hash.clone(),
                    };
                    if let Err(err) = self.history.add(record).await {
                        warn!(filename = %filename, "failed to record file history: {err:#}");
                    }
                    reports.push(UploadReport {
                        filename,
                        status: UploadStatus::Uploaded(data),
                    });
                }
                Err(err) => {
                    warn!(filename = %filename, "upload failed: {err}");
                    reports.push(UploadReport {
                        filename,
                        status: UploadStatus::Failed {
                            error: err.to_string(),
                        },
                    });
                }
            }
        }

        let succeeded = reports.iter().filter(|report| report.succeeded()).count();
        info!(total = reports.len(), succeeded, "batch upload finished");
        Ok(reports)
    }
}
