use crate::constants::DEFAULT_PAGE_CACHE_CAPACITY;
use crate::error::AppError;
use crate::teletext_ui::{Page, PageNumber};
use lru::LruCache;
use std::future::Future;
use std::num::NonZeroUsize;
use tracing::{debug, info, instrument, warn};

/// Bounded, recency-ordered store of fetched pages.
///
/// Inserting or reading an entry makes it the most recently used one. When
/// the cache is full, inserting a new page evicts the least recently used
/// page as a whole.
#[derive(Debug)]
pub struct PageCache {
    entries: LruCache<PageNumber, Page>,
}

impl PageCache {
    /// Creates a cache holding at most `capacity` pages.
    ///
    /// # Errors
    /// * `AppError::InvalidCacheCapacity` - `capacity` is zero
    pub fn new(capacity: usize) -> Result<Self, AppError> {
        let capacity =
            NonZeroUsize::new(capacity).ok_or(AppError::InvalidCacheCapacity(capacity))?;
        Ok(Self::with_capacity(capacity))
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `number` is cached, without touching recency
    pub fn contains(&self, number: PageNumber) -> bool {
        self.entries.contains(&number)
    }

    /// Looks at a cached page without touching recency
    pub fn peek(&self, number: PageNumber) -> Option<&Page> {
        self.entries.peek(&number)
    }

    /// Returns a cached page and promotes it to most recently used
    pub fn get_mut(&mut self, number: PageNumber) -> Option<&mut Page> {
        self.entries.get_mut(&number)
    }

    /// Stores `page` under its own number, returning the page it displaced, if any.
    pub fn insert(&mut self, page: Page) -> Option<Page> {
        let number = page.number();
        self.log_eviction(number);
        let displaced = self.entries.push(number, page).map(|(_, page)| page);
        debug!(
            "Cached page {number}: size={}, capacity={}",
            self.entries.len(),
            self.capacity()
        );
        displaced
    }

    fn log_eviction(&self, incoming: PageNumber) {
        if !self.entries.contains(&incoming) && self.entries.len() == self.capacity() {
            if let Some((evicted, _)) = self.entries.peek_lru() {
                info!("Evicting page {evicted} from page cache");
            }
        }
    }

    /// Returns the page for `number`, fetching and caching it on a miss.
    ///
    /// A hit promotes the entry. A miss awaits `fetch` exactly once and
    /// stores its result under `number`, evicting the least recently used
    /// page when full.
    #[instrument(skip(self, fetch))]
    pub async fn get_or_fetch<F, Fut>(&mut self, number: PageNumber, fetch: F) -> &mut Page
    where
        F: FnOnce(PageNumber) -> Fut,
        Fut: Future<Output = Page>,
    {
        // Taking the entry out and putting it back makes it the most recent
        let page = match self.entries.pop(&number) {
            Some(page) => {
                debug!("Page cache hit: page={number}");
                page
            }
            None => {
                debug!("Page cache miss: page={number}");
                let page = fetch(number).await;
                if page.number() != number {
                    warn!("Fetch for page {number} returned page {}", page.number());
                }
                self.log_eviction(number);
                page
            }
        };
        self.entries.get_or_insert_mut(number, move || page)
    }

    /// Drops `number` from the cache so the next access fetches it again
    pub fn invalidate(&mut self, number: PageNumber) -> Option<Page> {
        let removed = self.entries.pop(&number);
        if removed.is_some() {
            debug!("Invalidated page {number} in page cache");
        }
        removed
    }

    /// Cached page numbers, most recently used first
    pub fn keys_by_recency(&self) -> Vec<PageNumber> {
        self.entries.iter().map(|(number, _)| *number).collect()
    }
}

impl Default for PageCache {
    fn default() -> Self {
        const CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_PAGE_CACHE_CAPACITY) {
            Some(capacity) => capacity,
            None => NonZeroUsize::MIN,
        };
        Self::with_capacity(CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: u16) -> Page {
        Page::from_document(PageNumber::new(number).unwrap(), "<pre>x</pre>")
    }

    fn number(value: u16) -> PageNumber {
        PageNumber::new(value).unwrap()
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let err = PageCache::new(0).unwrap_err();
        assert!(matches!(err, AppError::InvalidCacheCapacity(0)));
    }

    #[test]
    fn test_default_capacity() {
        let cache = PageCache::default();
        assert_eq!(cache.capacity(), 10);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_eleven_inserts_keep_ten_newest() {
        let mut cache = PageCache::new(10).unwrap();
        for value in 100..111 {
            cache.insert(page(value));
        }
        assert_eq!(cache.len(), 10);
        assert!(!cache.contains(number(100)));
        for value in 101..111 {
            assert!(cache.contains(number(value)), "page {value}");
        }
    }

    #[test]
    fn test_access_promotes_entry() {
        let mut cache = PageCache::new(2).unwrap();
        cache.insert(page(100));
        cache.insert(page(101));
        assert!(cache.get_mut(number(100)).is_some());
        cache.insert(page(102));
        assert!(cache.contains(number(100)));
        assert!(!cache.contains(number(101)));
        assert_eq!(cache.keys_by_recency(), vec![number(102), number(100)]);
    }

    #[test]
    fn test_peek_does_not_promote() {
        let mut cache = PageCache::new(2).unwrap();
        cache.insert(page(100));
        cache.insert(page(101));
        assert!(cache.peek(number(100)).is_some());
        cache.insert(page(102));
        assert!(!cache.contains(number(100)));
    }

    #[test]
    fn test_reinsert_replaces_without_eviction() {
        let mut cache = PageCache::new(2).unwrap();
        cache.insert(page(100));
        cache.insert(page(101));
        let displaced = cache.insert(Page::failed(number(100), "gone"));
        assert!(displaced.is_some_and(|p| p.load_error().is_none()));
        assert_eq!(cache.len(), 2);
        assert!(cache.peek(number(100)).unwrap().load_error().is_some());
    }

    #[test]
    fn test_invalidate_removes_entry() {
        let mut cache = PageCache::default();
        cache.insert(page(377));
        assert!(cache.invalidate(number(377)).is_some());
        assert!(cache.invalidate(number(377)).is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_get_or_fetch_fetches_once() {
        let mut cache = PageCache::default();
        let mut calls = 0;

        let first = cache
            .get_or_fetch(number(200), |n| {
                calls += 1;
                async move { Page::from_document(n, "<pre>fresh</pre>") }
            })
            .await;
        assert_eq!(first.current().unwrap().plain_text(), "fresh");

        let second = cache
            .get_or_fetch(number(200), |n| {
                calls += 1;
                async move { Page::failed(n, "should not be fetched") }
            })
            .await;
        assert!(second.load_error().is_none());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_get_or_fetch_keeps_position_between_hits() {
        let mut cache = PageCache::default();
        let page = cache
            .get_or_fetch(number(300), |n| async move {
                Page::from_document(n, "<pre>a</pre><pre>b</pre>")
            })
            .await;
        page.advance();

        let page = cache
            .get_or_fetch(number(300), |n| async move { Page::failed(n, "unused") })
            .await;
        assert_eq!(page.current_index(), 1);
    }

    #[tokio::test]
    async fn test_get_or_fetch_stores_under_requested_number() {
        let mut cache = PageCache::default();
        let stored = cache
            .get_or_fetch(number(100), |_| async move { page(101) })
            .await;
        assert_eq!(stored.current().unwrap().plain_text(), "x");

        assert!(cache.contains(number(100)));
        assert!(!cache.contains(number(101)));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_get_or_fetch_hit_promotes_and_miss_evicts() {
        let mut cache = PageCache::new(2).unwrap();
        cache.insert(page(100));
        cache.insert(page(101));

        cache
            .get_or_fetch(number(100), |n| async move { Page::failed(n, "unused") })
            .await;
        assert_eq!(cache.keys_by_recency(), vec![number(100), number(101)]);

        cache
            .get_or_fetch(number(102), |n| async move { Page::from_document(n, "<pre>y</pre>") })
            .await;
        assert_eq!(cache.keys_by_recency(), vec![number(102), number(100)]);
        assert!(cache.peek(number(100)).unwrap().load_error().is_none());
    }
}
