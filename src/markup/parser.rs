//! Teletext markup parser
//!
//! [`MarkupParser`] is a plain state accumulator advanced one [`MarkupEvent`]
//! at a time by [`MarkupParser::step`]. It tracks whether the current position
//! is inside a content block (`<pre>`), the stack of scope styles (`<span>`),
//! a pending link (`<a href>`) and a pending header fill code (`<span style>`),
//! and groups the emitted fragments into sub-pages, one per content block.

use super::glyphs::header_glyph;
use super::style::{StyleSpec, resolve_style};
use super::tokenizer::{MarkupEvent, tokenize};
use crate::error::AppError;
use std::mem;
use tracing::{debug, warn};

const CONTENT_BLOCK_TAG: &str = "pre";
const LINK_TAG: &str = "a";
const SCOPE_TAG: &str = "span";

/// A run of text sharing one style and optional link target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledFragment {
    pub text: String,
    pub style: StyleSpec,
    pub link: Option<String>,
}

impl StyledFragment {
    pub fn new(text: impl Into<String>, style: StyleSpec, link: Option<String>) -> Self {
        Self {
            text: text.into(),
            style,
            link,
        }
    }
}

/// One screen's worth of fragments, in render order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubPage {
    fragments: Vec<StyledFragment>,
}

impl SubPage {
    pub fn new(fragments: Vec<StyledFragment>) -> Self {
        Self { fragments }
    }

    pub fn fragments(&self) -> &[StyledFragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Concatenated text of all fragments, without styling
    pub fn plain_text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a SubPage {
    type Item = &'a StyledFragment;
    type IntoIter = std::slice::Iter<'a, StyledFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

/// Event-driven parser state.
///
/// The style stack always holds at least the default style. Every `<span>`
/// opened inside a content block pushes one entry (its resolved style, or a
/// copy of the parent's when it has no `class`), so open and close stay
/// balanced.
#[derive(Debug, Clone)]
pub struct MarkupParser {
    in_content_block: bool,
    style_stack: Vec<StyleSpec>,
    pending_link: Option<String>,
    pending_fill_code: Option<String>,
    current: Vec<StyledFragment>,
    subpages: Vec<SubPage>,
}

impl Default for MarkupParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupParser {
    pub fn new() -> Self {
        Self {
            in_content_block: false,
            style_stack: vec![StyleSpec::default()],
            pending_link: None,
            pending_fill_code: None,
            current: Vec::new(),
            subpages: Vec::new(),
        }
    }

    /// Whether the parser is currently inside a content block
    pub fn in_content_block(&self) -> bool {
        self.in_content_block
    }

    /// Number of entries on the style stack (never below 1)
    pub fn style_depth(&self) -> usize {
        self.style_stack.len()
    }

    fn top_style(&self) -> StyleSpec {
        // The stack is never empty; the default entry is never popped.
        self.style_stack.last().copied().unwrap_or_default()
    }

    /// Advances the parser by one markup event.
    ///
    /// # Errors
    /// * `AppError::StyleLookup` - a scope names a class outside the teletext vocabulary
    /// * `AppError::UnbalancedScope` - a scope close would pop the default style
    pub fn step(&mut self, event: MarkupEvent) -> Result<(), AppError> {
        match event {
            MarkupEvent::StartTag { name, attrs } => self.open_tag(&name, &attrs),
            MarkupEvent::EndTag { name } => self.close_tag(&name),
            MarkupEvent::Text(text) => {
                self.push_text(text);
                Ok(())
            }
        }
    }

    fn open_tag(&mut self, name: &str, attrs: &[(String, String)]) -> Result<(), AppError> {
        if name == CONTENT_BLOCK_TAG {
            if self.in_content_block && !self.current.is_empty() {
                debug!(
                    "Nested content block opened, dropping {} fragments",
                    self.current.len()
                );
            }
            if self.style_stack.len() > 1 {
                debug!(
                    "Dropping {} unclosed scopes at content block start",
                    self.style_stack.len() - 1
                );
            }
            // Every sub-page starts from the default style
            self.style_stack.truncate(1);
            self.pending_link = None;
            self.pending_fill_code = None;
            self.in_content_block = true;
            self.current.clear();
            return Ok(());
        }

        if !self.in_content_block {
            return Ok(());
        }

        match name {
            LINK_TAG => {
                // One link per element: only the first href counts
                if let Some((_, href)) = attrs.iter().find(|(key, _)| key == "href") {
                    self.pending_link = (!href.is_empty()).then(|| href.clone());
                }
            }
            SCOPE_TAG => {
                let parent = self.top_style();
                let mut scope_style = parent;
                for (key, value) in attrs {
                    match key.as_str() {
                        "style" => {
                            let digits: String =
                                value.chars().filter(char::is_ascii_digit).collect();
                            self.pending_fill_code = (!digits.is_empty()).then_some(digits);
                        }
                        "class" => {
                            let tokens: Vec<&str> = value.split_whitespace().collect();
                            scope_style = resolve_style(&parent, &tokens)?;
                        }
                        _ => {}
                    }
                }
                self.style_stack.push(scope_style);
            }
            _ => {}
        }

        Ok(())
    }

    fn close_tag(&mut self, name: &str) -> Result<(), AppError> {
        if name == CONTENT_BLOCK_TAG {
            if self.in_content_block {
                self.in_content_block = false;
                self.subpages.push(SubPage::new(mem::take(&mut self.current)));
            } else {
                debug!("Ignoring </{CONTENT_BLOCK_TAG}> outside a content block");
            }
            return Ok(());
        }

        if self.in_content_block && name == SCOPE_TAG {
            if self.style_stack.len() <= 1 {
                return Err(AppError::UnbalancedScope {
                    tag: SCOPE_TAG.to_string(),
                });
            }
            self.style_stack.pop();
        }

        Ok(())
    }

    fn push_text(&mut self, text: String) {
        if !self.in_content_block {
            return;
        }

        let mut style = self.top_style();
        if self.pending_link.is_some() {
            style = style.with_link_underline();
        }

        let text = match self.pending_fill_code.take() {
            Some(code) => match header_glyph(&code) {
                Ok(glyph) => glyph.to_string(),
                Err(e) => {
                    warn!("{e}, emitting empty fragment");
                    String::new()
                }
            },
            None => text,
        };

        self.current.push(StyledFragment {
            text,
            style,
            link: self.pending_link.take(),
        });
    }

    /// Consumes the parser and returns the completed sub-pages.
    ///
    /// A content block still open at end of input is discarded.
    pub fn finish(self) -> Vec<SubPage> {
        if self.in_content_block {
            warn!(
                "Content block left open at end of input, discarding {} fragments",
                self.current.len()
            );
        }
        self.subpages
    }
}

/// Parses a decoded teletext document into its sub-pages.
///
/// # Errors
/// Any error from [`MarkupParser::step`] aborts the parse of the whole document.
///
/// # Example
/// ```
/// use texttv::markup::{TeletextColor, TextAttribute, parse_document};
///
/// let subpages = parse_document(r#"<pre><span class="FG_GREEN BG_BLACK">ABC</span></pre>"#)?;
/// assert_eq!(subpages.len(), 1);
/// let fragment = &subpages[0].fragments()[0];
/// assert_eq!(fragment.text, "ABC");
/// assert_eq!(fragment.style.foreground, TeletextColor::Green);
/// assert_eq!(fragment.style.background, TeletextColor::Black);
/// assert_eq!(fragment.style.attribute, TextAttribute::Normal);
/// # Ok::<(), texttv::AppError>(())
/// ```
pub fn parse_document(document: &str) -> Result<Vec<SubPage>, AppError> {
    let mut parser = MarkupParser::new();
    for event in tokenize(document) {
        parser.step(event)?;
    }
    let subpages = parser.finish();
    debug!("Parsed {} sub-pages", subpages.len());
    Ok(subpages)
}
