use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use see_client::SeeClient;
use see_core::api::{TextShareRequest, TextType};
use see_core::history::{NewTextShare, TextHistoryItem};
use see_core::ports::{ClockPort, KvStorePort};
use see_core::Vertical;

use crate::drafts::{DraftField, DraftStore};
use crate::history::HistoryStore;
use crate::settings::SettingsService;
use crate::usecases::{ShareOutcome, FALLBACK_DOMAIN};

/// Input to [`ShareText`]. Content and title validation happens in the
/// SDK, before any request is issued.
#[derive(Debug, Clone, Default)]
pub struct ShareTextInput {
    pub content: String,
    pub title: String,
    pub domain: Option<String>,
    pub custom_slug: Option<String>,
    pub password: Option<String>,
    pub text_type: Option<TextType>,
    pub expire_at: Option<i64>,
}

/// Shares a text and records the outcome.
///
/// On success the text drafts (content and title) are cleared; on any
/// failure drafts and history stay exactly as they were.
pub struct ShareText {
    client: Arc<SeeClient>,
    settings: SettingsService,
    history: HistoryStore<TextHistoryItem>,
    drafts: DraftStore,
}

impl ShareText {
    pub fn new(
        client: Arc<SeeClient>,
        store: Arc<dyn KvStorePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            client,
            settings: SettingsService::new(store.clone()),
            history: HistoryStore::new(store.clone(), clock),
            drafts: DraftStore::new(store),
        }
    }

    pub async fn execute(&self, input: ShareTextInput) -> Result<ShareOutcome> {
        let domain = match input.domain {
            Some(domain) => domain,
            None => self.stored_default().await,
        };
        let text_type = input.text_type.unwrap_or_default();

        let request = TextShareRequest {
            content: input.content,
            title: input.title.clone(),
            domain: Some(domain.clone()),
            custom_slug: input.custom_slug,
            password: input.password,
            text_type: Some(text_type),
            expire_at: input.expire_at,
        };
        let response = self.client.share_text(&request).await?;
        let data = response.data;

        if let Err(err) = self
            .settings
            .save_default_domain(Vertical::Text, &domain)
            .await
        {
            warn!("failed to save default text domain: {err:#}");
        }
        let record = NewTextShare {
            title: input.title,
            short_url: data.short_url.clone(),
            domain: domain.clone(),
            text_type,
        };
        if let Err(err) = self.history.add(record).await {
            warn!("failed to record text history: {err:#}");
        }
        for field in [DraftField::TextContent, DraftField::TextTitle] {
            if let Err(err) = self.drafts.clear(field).await {
                warn!("failed to clear text draft: {err:#}");
            }
        }

        info!(domain = %domain, slug = %data.slug, "text shared");
        Ok(ShareOutcome {
            short_url: data.short_url,
            slug: data.slug,
            domain,
        })
    }

    async fn stored_default(&self) -> String {
        self.settings
            .default_domain(Vertical::Text)
            .await
            .unwrap_or_else(|err| {
                warn!("failed to read default text domain: {err:#}");
                None
            })
            .unwrap_or_else(|| FALLBACK_DOMAIN.to_string())
    }
}
