use std::sync::Arc;

use anyhow::Result;

use see_core::keys;
use see_core::ports::{get_value, put_value, KvStorePort, StorageScope};

/// One of the persisted draft slots. Drafts are ephemeral form input kept
/// so a reopened surface can restore it; they have no relation to history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    TextContent,
    TextTitle,
    CustomUrl,
}

impl DraftField {
    fn key(self) -> &'static str {
        match self {
            DraftField::TextContent => keys::DRAFT_TEXT_CONTENT,
            DraftField::TextTitle => keys::DRAFT_TEXT_TITLE,
            DraftField::CustomUrl => keys::DRAFT_CUSTOM_URL,
        }
    }
}

pub struct DraftStore {
    store: Arc<dyn KvStorePort>,
}

impl DraftStore {
    pub fn new(store: Arc<dyn KvStorePort>) -> Self {
        Self { store }
    }

    pub async fn load(&self, field: DraftField) -> Result<Option<String>> {
        get_value(self.store.as_ref(), StorageScope::Local, field.key()).await
    }

    /// Saving an empty string drops the key instead of storing it.
    pub async fn save(&self, field: DraftField, value: &str) -> Result<()> {
        if value.is_empty() {
            self.clear(field).await
        } else {
            put_value(self.store.as_ref(), StorageScope::Local, field.key(), value).await
        }
    }

    pub async fn clear(&self, field: DraftField) -> Result<()> {
        self.store.remove(StorageScope::Local, field.key()).await
    }
}
