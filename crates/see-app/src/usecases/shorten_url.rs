use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use see_client::SeeClient;
use see_core::api::UrlShortenRequest;
use see_core::history::{NewUrlShare, UrlHistoryItem};
use see_core::ports::{ClockPort, KvStorePort};
use see_core::Vertical;

use crate::drafts::{DraftField, DraftStore};
use crate::history::HistoryStore;
use crate::settings::SettingsService;
use crate::usecases::{ShareOutcome, FALLBACK_DOMAIN};

/// Input to [`ShortenUrl`]. The domain falls back to the stored default
/// when not named.
#[derive(Debug, Clone, Default)]
pub struct ShortenInput {
    pub target_url: String,
    pub domain: Option<String>,
    pub custom_slug: Option<String>,
    pub title: Option<String>,
    pub password: Option<String>,
    pub expire_at: Option<i64>,
}

/// Shortens a URL and records the outcome.
///
/// The API call alone decides success. A failed call leaves every piece of
/// persisted state untouched; bookkeeping writes after a successful call
/// (history, default domain, draft) are logged and never fail the action.
pub struct ShortenUrl {
    client: Arc<SeeClient>,
    settings: SettingsService,
    history: HistoryStore<UrlHistoryItem>,
    drafts: DraftStore,
}

impl ShortenUrl {
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

    pub async fn execute(&self, input: ShortenInput) -> Result<ShareOutcome> {
        let domain = match input.domain {
            Some(domain) => domain,
            None => self.stored_default().await,
        };

        let request = UrlShortenRequest {
            domain: domain.clone(),
            target_url: input.target_url.clone(),
            custom_slug: input.custom_slug,
            title: input.title,
            password: input.password,
            expire_at: input.expire_at,
        };
        let response = self.client.shorten_url(&request).await?;
        let data = response.data;

        if let Err(err) = self
            .settings
            .save_default_domain(Vertical::Url, &domain)
            .await
        {
            warn!("failed to save default url domain: {err:#}");
        }
        let record = NewUrlShare {
            original_url: input.target_url,
            short_url: data.short_url.clone(),
            domain: domain.clone(),
            slug: Some(data.slug.clone()),
        };
        if let Err(err) = self.history.add(record).await {
            warn!("failed to record url history: {err:#}");
        }
        if let Err(err) = self.drafts.clear(DraftField::CustomUrl).await {
            warn!("failed to clear custom url draft: {err:#}");
        }

        info!(domain = %domain, slug = %data.slug, "url shortened");
        Ok(ShareOutcome {
            short_url: data.short_url,
            slug: data.slug,
            domain,
        })
    }

    async fn stored_default(&self) -> String {
        self.settings
            .default_domain(Vertical::Url)
            .await
            .unwrap_or_else(|err| {
                warn!("failed to read default url domain: {err:#}");
                None
            })
            .unwrap_or_else(|| FALLBACK_DOMAIN.to_string())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use async_trait::async_trait;
    use mockito::{Matcher, Server};
    use see_client::{codes, ClientConfig, SeeError};
    use see_core::keys;
    use see_core::ports::StorageScope;
    use see_infra::{MemoryKvStore, SystemClock};
    use serde_json::{json, Value};

    use super::*;

    fn client(base_url: &str) -> Arc<SeeClient> {
        Arc::new(SeeClient::new(ClientConfig::new("tok").with_base_url(base_url)).unwrap())
    }

    fn short_link_body() -> String {
        json!({
            "code": 0,
            "message": "ok",
            "data": { "short_url": "https://s.ee/abc", "slug": "abc" }
        })
        .to_string()
    }

    #[tokio::test]
    async fn success_records_history_and_default_domain() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/shorten")
            .match_body(Matcher::PartialJson(json!({
                "domain": "l.ink",
                "target_url": "https://example.com/a"
            })))
            .with_status(200)
            .with_body(short_link_body())
            .create_async()
            .await;

        let store = Arc::new(MemoryKvStore::new());
        let usecase = ShortenUrl::new(client(&server.url()), store.clone(), Arc::new(SystemClock));
        let outcome = usecase
            .execute(ShortenInput {
                target_url: "https://example.com/a".into(),
                domain: Some("l.ink".into()),
                ..ShortenInput::default()
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(outcome.short_url, "https://s.ee/abc");
        assert_eq!(outcome.domain, "l.ink");

        let history = HistoryStore::<UrlHistoryItem>::new(store.clone(), Arc::new(SystemClock));
        let items = history.all().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].original_url, "https://example.com/a");
        assert_eq!(items[0].slug.as_deref(), Some("abc"));

        let settings = SettingsService::new(store);
        assert_eq!(
            settings.default_domain(Vertical::Url).await.unwrap(),
            Some("l.ink".to_string())
        );
    }

    #[tokio::test]
    async fn failure_leaves_state_untouched() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/v1/shorten")
            .with_status(400)
            .with_body(json!({ "code": "INVALID_URL", "message": "Invalid target URL" }).to_string())
            .create_async()
            .await;

        let store = Arc::new(MemoryKvStore::new());
        let usecase = ShortenUrl::new(client(&server.url()), store.clone(), Arc::new(SystemClock));
        let err = usecase
            .execute(ShortenInput {
                target_url: "https://example.com/a".into(),
                domain: Some("s.ee".into()),
                ..ShortenInput::default()
            })
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<SeeError>().and_then(SeeError::code),
            Some("INVALID_URL")
        );
        let history = HistoryStore::<UrlHistoryItem>::new(store.clone(), Arc::new(SystemClock));
        assert!(history.all().await.unwrap().is_empty());
        assert_eq!(
            SettingsService::new(store)
                .default_domain(Vertical::Url)
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn malformed_url_is_rejected_before_the_network() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/shorten")
            .expect(0)
            .create_async()
            .await;

        let store = Arc::new(MemoryKvStore::new());
        let usecase = ShortenUrl::new(client(&server.url()), store, Arc::new(SystemClock));
        let err = usecase
            .execute(ShortenInput {
                target_url: "not a url".into(),
                domain: Some("s.ee".into()),
                ..ShortenInput::default()
            })
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(
            err.downcast_ref::<SeeError>().and_then(SeeError::code),
            Some(codes::INVALID_URL)
        );
    }

    #[tokio::test]
    async fn missing_domain_uses_the_stored_default() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/shorten")
            .match_body(Matcher::PartialJson(json!({ "domain": "my.link" })))
            .with_status(200)
            .with_body(short_link_body())
            .create_async()
            .await;

        let store = Arc::new(MemoryKvStore::new());
        SettingsService::new(store.clone())
            .save_default_domain(Vertical::Url, "my.link")
            .await
            .unwrap();

        let usecase = ShortenUrl::new(client(&server.url()), store, Arc::new(SystemClock));
        usecase
            .execute(ShortenInput {
                target_url: "https://example.com".into(),
                ..ShortenInput::default()
            })
            .await
            .unwrap();

        mock.assert_async().await;
    }

    /// Store whose local-scope writes fail; synced writes pass through.
    struct BrokenLocalWrites(MemoryKvStore);

    #[async_trait]
    impl KvStorePort for BrokenLocalWrites {
        async fn get(&self, scope: StorageScope, key: &str) -> Result<Option<Value>> {
            self.0.get(scope, key).await
        }

        async fn put(&self, scope: StorageScope, key: &str, value: Value) -> Result<()> {
            if scope == StorageScope::Local {
                return Err(anyhow!("local storage unavailable"));
            }
            self.0.put(scope, key, value).await
        }

        async fn remove(&self, scope: StorageScope, key: &str) -> Result<()> {
            self.0.remove(scope, key).await
        }
    }

    #[tokio::test]
    async fn history_write_failure_does_not_fail_the_action() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/v1/shorten")
            .with_status(200)
            .with_body(short_link_body())
            .create_async()
            .await;

        let store = Arc::new(BrokenLocalWrites(MemoryKvStore::new()));
        let usecase = ShortenUrl::new(client(&server.url()), store.clone(), Arc::new(SystemClock));
        let outcome = usecase
            .execute(ShortenInput {
                target_url: "https://example.com".into(),
                domain: Some("s.ee".into()),
                ..ShortenInput::default()
            })
            .await
            .unwrap();

        assert_eq!(outcome.slug, "abc");
        // The synced default-domain write still went through.
        assert_eq!(
            store
                .get(StorageScope::Synced, keys::DEFAULT_URL_DOMAIN)
                .await
                .unwrap(),
            Some(json!("s.ee"))
        );
    }
}
