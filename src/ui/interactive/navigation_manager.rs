//! Navigation across pages and sub-pages
//!
//! The [`NavigationManager`] owns the page source, the page cache and the
//! current page number. Sub-page position lives on each cached [`Page`], so
//! returning to a cached page resumes where it was left unless the move
//! explicitly targets a sub-page.

use crate::data_fetcher::{PageCache, PageSource};
use crate::teletext_ui::{Page, PageNumber, SubPageTarget};
use tracing::{debug, info};

/// A navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Next sub-page, or the first sub-page of the next page
    Advance,
    /// Previous sub-page, or the last sub-page of the previous page
    Retreat,
    /// First sub-page of the given, already validated, page
    Goto(PageNumber),
    /// Fetch the current page again
    Reload,
    Quit,
}

/// What handling a [`NavEvent`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Moved,
    /// Already at the edge; nothing changed
    Held,
    Quit,
}

pub struct NavigationManager<S> {
    source: S,
    cache: PageCache,
    current: PageNumber,
}

impl<S: PageSource> NavigationManager<S> {
    pub fn new(source: S, cache: PageCache, start: PageNumber) -> Self {
        Self {
            source,
            cache,
            current: start,
        }
    }

    pub fn current_number(&self) -> PageNumber {
        self.current
    }

    pub fn cache(&self) -> &PageCache {
        &self.cache
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the current page, fetching it on a cache miss
    pub async fn current_page(&mut self) -> &mut Page {
        let number = self.current;
        self.load(number).await
    }

    async fn load(&mut self, number: PageNumber) -> &mut Page {
        let source = &self.source;
        self.cache
            .get_or_fetch(number, |n| async move {
                Page::from_fetch_result(n, source.fetch_page(n).await)
            })
            .await
    }

    async fn move_to(&mut self, number: PageNumber, target: SubPageTarget) {
        info!("Navigating to page {number}");
        self.current = number;
        self.load(number).await.jump(target);
    }

    /// The page that handling `event` would have to fetch, if any.
    ///
    /// Lets the caller show a loading notice before a fetch starts.
    pub fn fetch_target(&self, event: NavEvent) -> Option<PageNumber> {
        let target = match event {
            NavEvent::Advance => match self.cache.peek(self.current) {
                Some(page) if page.can_advance() => return None,
                Some(_) => self.current.next()?,
                None => self.current,
            },
            NavEvent::Retreat => match self.cache.peek(self.current) {
                Some(page) if page.can_retreat() => return None,
                Some(_) => self.current.previous()?,
                None => self.current,
            },
            NavEvent::Goto(number) => number,
            NavEvent::Reload => return Some(self.current),
            NavEvent::Quit => return None,
        };
        (!self.cache.contains(target)).then_some(target)
    }

    /// Applies one navigation event.
    pub async fn handle(&mut self, event: NavEvent) -> NavOutcome {
        debug!("Handling navigation event {event:?} on page {}", self.current);

        match event {
            NavEvent::Advance => {
                if self.current_page().await.advance() {
                    return NavOutcome::Moved;
                }
                match self.current.next() {
                    Some(next) => {
                        self.move_to(next, SubPageTarget::Index(0)).await;
                        NavOutcome::Moved
                    }
                    None => NavOutcome::Held,
                }
            }
            NavEvent::Retreat => {
                if self.current_page().await.retreat() {
                    return NavOutcome::Moved;
                }
                match self.current.previous() {
                    Some(previous) => {
                        self.move_to(previous, SubPageTarget::Last).await;
                        NavOutcome::Moved
                    }
                    None => NavOutcome::Held,
                }
            }
            NavEvent::Goto(number) => {
                self.move_to(number, SubPageTarget::Index(0)).await;
                NavOutcome::Moved
            }
            NavEvent::Reload => {
                let number = self.current;
                self.cache.invalidate(number);
                self.load(number).await;
                NavOutcome::Moved
            }
            NavEvent::Quit => NavOutcome::Quit,
        }
    }
}
