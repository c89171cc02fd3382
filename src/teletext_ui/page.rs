//! A fetched teletext page and its sub-page position

use super::page_number::PageNumber;
use crate::error::AppError;
use crate::markup::{SubPage, parse_document};
use tracing::{debug, warn};

/// Target of a sub-page jump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubPageTarget {
    Index(usize),
    Last,
}

/// One fetched document, parsed once into its sub-pages.
///
/// A page whose fetch or parse failed has no sub-pages and carries the failure
/// reason in [`Page::load_error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    number: PageNumber,
    subpages: Vec<SubPage>,
    current_index: usize,
    load_error: Option<String>,
}

impl Page {
    /// Parses a fetched document. A parse failure yields an empty page.
    pub fn from_document(number: PageNumber, document: &str) -> Self {
        match parse_document(document) {
            Ok(subpages) => {
                debug!("Page {number} has {} sub-pages", subpages.len());
                Self::from_subpages(number, subpages)
            }
            Err(e) => {
                warn!("Failed to parse page {number}: {e}");
                Self::failed(number, e.to_string())
            }
        }
    }

    /// Builds a page from the outcome of a fetch.
    pub fn from_fetch_result(number: PageNumber, result: Result<String, AppError>) -> Self {
        match result {
            Ok(document) => Self::from_document(number, &document),
            Err(e) => {
                warn!("Failed to fetch page {number}: {e}");
                Self::failed(number, e.to_string())
            }
        }
    }

    pub fn from_subpages(number: PageNumber, subpages: Vec<SubPage>) -> Self {
        Self {
            number,
            subpages,
            current_index: 0,
            load_error: None,
        }
    }

    /// An empty page that failed to load
    pub fn failed(number: PageNumber, reason: impl Into<String>) -> Self {
        Self {
            number,
            subpages: Vec::new(),
            current_index: 0,
            load_error: Some(reason.into()),
        }
    }

    pub fn number(&self) -> PageNumber {
        self.number
    }

    pub fn is_empty(&self) -> bool {
        self.subpages.is_empty()
    }

    /// Why the page failed to load, if it did
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn subpage_count(&self) -> usize {
        self.subpages.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn subpages(&self) -> &[SubPage] {
        &self.subpages
    }

    /// The sub-page at the current position, `None` for an empty page
    pub fn current(&self) -> Option<&SubPage> {
        self.subpages.get(self.current_index)
    }

    /// Moves to `target`. An out-of-range target leaves the position unchanged.
    pub fn jump(&mut self, target: SubPageTarget) -> Option<&SubPage> {
        let index = match target {
            SubPageTarget::Index(index) => index,
            SubPageTarget::Last => self.subpages.len().checked_sub(1)?,
        };
        if index >= self.subpages.len() {
            return None;
        }
        self.current_index = index;
        self.subpages.get(index)
    }

    pub fn can_advance(&self) -> bool {
        self.current_index + 1 < self.subpages.len()
    }

    pub fn can_retreat(&self) -> bool {
        self.current_index > 0
    }

    /// Moves to the next sub-page, returning false at the last one
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Moves to the previous sub-page, returning false at the first one
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.current_index -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(count: usize) -> Page {
        let document: String = (0..count).map(|i| format!("<pre>sub {i}</pre>")).collect();
        Page::from_document(PageNumber::default(), &document)
    }

    #[test]
    fn test_advance_stops_at_last_subpage() {
        let mut page = page_with(3);
        let moves = (page.advance(), page.advance(), page.advance());
        assert_eq!(moves, (true, true, false));
        assert_eq!(page.current_index(), 2);
    }

    #[test]
    fn test_retreat_stops_at_first_subpage() {
        let mut page = page_with(2);
        assert!(!page.retreat());
        assert!(page.advance());
        assert!(page.retreat());
        assert_eq!(page.current_index(), 0);
    }

    #[test]
    fn test_current_follows_position() {
        let mut page = page_with(2);
        assert_eq!(page.current().unwrap().plain_text(), "sub 0");
        page.advance();
        assert_eq!(page.current().unwrap().plain_text(), "sub 1");
    }

    #[test]
    fn test_jump_to_last_and_index() {
        let mut page = page_with(4);
        assert_eq!(page.jump(SubPageTarget::Last).unwrap().plain_text(), "sub 3");
        assert_eq!(page.current_index(), 3);
        assert!(page.jump(SubPageTarget::Index(1)).is_some());
        assert_eq!(page.current_index(), 1);
    }

    #[test]
    fn test_out_of_range_jump_changes_nothing() {
        let mut page = page_with(2);
        page.advance();
        assert!(page.jump(SubPageTarget::Index(5)).is_none());
        assert_eq!(page.current_index(), 1);
    }

    #[test]
    fn test_empty_page_has_no_position() {
        let mut page = page_with(0);
        assert!(page.is_empty());
        assert!(page.current().is_none());
        assert!(page.jump(SubPageTarget::Last).is_none());
        assert!(!page.advance());
        assert!(!page.retreat());
        assert_eq!(page.load_error(), None);
    }

    #[test]
    fn test_fetch_failure_becomes_failed_page() {
        let number = PageNumber::new(377).unwrap();
        let page = Page::from_fetch_result(number, Err(AppError::page_not_found("u")));
        assert!(page.is_empty());
        assert_eq!(page.number(), number);
        assert!(page.load_error().unwrap().contains("404"));
    }

    #[test]
    fn test_parse_failure_becomes_failed_page() {
        let page = Page::from_document(PageNumber::default(), r#"<pre><span class="bgQ">x</span></pre>"#);
        assert!(page.is_empty());
        assert!(page.load_error().unwrap().contains("bgQ"));
    }
}
