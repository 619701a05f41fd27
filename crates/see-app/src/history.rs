use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::Arc;

use anyhow::{Context, Result};

use see_core::history::{paginate, HistoryVariant, Page};
use see_core::ids::HistoryId;
use see_core::ports::{get_value, put_value, ClockPort, KvStorePort, StorageScope};

/// Collection operations over one history variant.
///
/// Every mutation is a read-modify-write of the whole collection; two
/// surfaces mutating the same collection concurrently resolve last-writer
/// wins. New items are prepended, so collections read newest-first.
pub struct HistoryStore<V> {
    store: Arc<dyn KvStorePort>,
    clock: Arc<dyn ClockPort>,
    _variant: PhantomData<V>,
}

impl<V: HistoryVariant> HistoryStore<V> {
    pub fn new(store: Arc<dyn KvStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            store,
            clock,
            _variant: PhantomData,
        }
    }

    /// The whole collection, newest first. An absent key reads as empty.
    pub async fn all(&self) -> Result<Vec<V>> {
        Ok(
            get_value(self.store.as_ref(), StorageScope::Local, V::STORAGE_KEY)
                .await?
                .unwrap_or_default(),
        )
    }

    /// Stamps a fresh id and creation timestamp onto `new`, prepends it,
    /// and returns the stored item.
    pub async fn add(&self, new: V::New) -> Result<V> {
        let mut items = self.all().await?;
        let item = V::assemble(HistoryId::new(), self.clock.now_ms(), new);
        items.insert(0, item.clone());
        self.write(&items).await?;
        Ok(item)
    }

    pub async fn delete(&self, id: &HistoryId) -> Result<()> {
        let mut items = self.all().await?;
        items.retain(|item| item.id() != id);
        self.write(&items).await
    }

    pub async fn delete_many(&self, ids: &[HistoryId]) -> Result<()> {
        let ids: HashSet<&HistoryId> = ids.iter().collect();
        let mut items = self.all().await?;
        items.retain(|item| !ids.contains(item.id()));
        self.write(&items).await
    }

    /// Drops the whole collection key.
    pub async fn clear(&self) -> Result<()> {
        self.store
            .remove(StorageScope::Local, V::STORAGE_KEY)
            .await
    }

    /// A snapshot of one page; see [`see_core::history::paginate`].
    pub async fn page(&self, page: usize) -> Result<Page<V>> {
        Ok(paginate(&self.all().await?, page))
    }

    async fn write(&self, items: &[V]) -> Result<()> {
        put_value(
            self.store.as_ref(),
            StorageScope::Local,
            V::STORAGE_KEY,
            items,
        )
        .await
        .with_context(|| format!("write history collection {} failed", V::STORAGE_KEY))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};

    use see_core::history::{NewUrlShare, UrlHistoryItem};
    use see_infra::MemoryKvStore;

    use super::*;

    struct TickingClock(AtomicI64);

    impl ClockPort for TickingClock {
        fn now_ms(&self) -> i64 {
            self.0.fetch_add(1, Ordering::SeqCst)
        }
    }

    fn store() -> HistoryStore<UrlHistoryItem> {
        HistoryStore::new(
            Arc::new(MemoryKvStore::new()),
            Arc::new(TickingClock(AtomicI64::new(1_000))),
        )
    }

    fn share(n: usize) -> NewUrlShare {
        NewUrlShare {
            original_url: format!("https://example.com/{n}"),
            short_url: format!("https://s.ee/{n}"),
            domain: "s.ee".into(),
            slug: Some(format!("slug{n}")),
        }
    }

    #[tokio::test]
    async fn add_prepends_and_stamps_a_unique_id() {
        let history = store();
        let first = history.add(share(1)).await.unwrap();
        let second = history.add(share(2)).await.unwrap();

        let items = history.all().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, second.id);
        assert_eq!(items[1].id, first.id);
        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, 1_000);
        assert_eq!(second.created_at, 1_001);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_entry() {
        let history = store();
        let a = history.add(share(1)).await.unwrap();
        let b = history.add(share(2)).await.unwrap();
        let c = history.add(share(3)).await.unwrap();

        history.delete(&b.id).await.unwrap();

        let items = history.all().await.unwrap();
        let ids: Vec<_> = items.iter().map(|item| item.id.clone()).collect();
        assert_eq!(ids, vec![c.id, a.id]);
        // Untouched entries keep their field values.
        assert_eq!(items[1].original_url, "https://example.com/1");
        assert_eq!(items[1].slug.as_deref(), Some("slug1"));
    }

    #[tokio::test]
    async fn delete_many_filters_by_membership() {
        let history = store();
        let a = history.add(share(1)).await.unwrap();
        let b = history.add(share(2)).await.unwrap();
        let c = history.add(share(3)).await.unwrap();
        let d = history.add(share(4)).await.unwrap();

        history
            .delete_many(&[a.id.clone(), c.id.clone()])
            .await
            .unwrap();

        let ids: Vec<_> = history
            .all()
            .await
            .unwrap()
            .iter()
            .map(|item| item.id.clone())
            .collect();
        assert_eq!(ids, vec![d.id, b.id]);
    }

    #[tokio::test]
    async fn clear_then_all_is_empty() {
        let history = store();
        history.add(share(1)).await.unwrap();
        history.add(share(2)).await.unwrap();

        history.clear().await.unwrap();

        assert!(history.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn pages_cut_at_ten_newest_first() {
        let history = store();
        for n in 1..=25 {
            history.add(share(n)).await.unwrap();
        }

        let first = history.page(1).await.unwrap();
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0].original_url, "https://example.com/25");

        let last = history.page(3).await.unwrap();
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.items[4].original_url, "https://example.com/1");
    }
}
