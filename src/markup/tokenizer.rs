//! HTML tokenization into a flat markup event stream
//!
//! The html5ever tokenizer drives an [`EventCollector`] sink which records start
//! tags, end tags and text runs. Entity references are decoded by the tokenizer
//! and adjacent character tokens are merged, so each run of text between two
//! tags becomes exactly one [`MarkupEvent::Text`].

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use html5ever::TokenizerResult;
use std::cell::RefCell;
use tracing::trace;

/// A single markup event, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    StartTag {
        name: String,
        attrs: Vec<(String, String)>,
    },
    EndTag {
        name: String,
    },
    Text(String),
}

impl MarkupEvent {
    /// Convenience constructor for a start tag event
    pub fn start(name: &str, attrs: &[(&str, &str)]) -> Self {
        Self::StartTag {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Convenience constructor for an end tag event
    pub fn end(name: &str) -> Self {
        Self::EndTag {
            name: name.to_string(),
        }
    }

    /// Convenience constructor for a text event
    pub fn text(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

#[derive(Default)]
struct EventCollector {
    events: RefCell<Vec<MarkupEvent>>,
}

impl EventCollector {
    fn push_text(&self, text: &str) {
        let mut events = self.events.borrow_mut();
        match events.last_mut() {
            Some(MarkupEvent::Text(existing)) => existing.push_str(text),
            _ => events.push(MarkupEvent::Text(text.to_string())),
        }
    }

    fn push_tag(&self, tag: Tag) -> TokenSinkResult<()> {
        let name = tag.name.to_string();
        let mut events = self.events.borrow_mut();

        match tag.kind {
            TagKind::StartTag => {
                let attrs = tag
                    .attrs
                    .iter()
                    .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                    .collect();
                events.push(MarkupEvent::StartTag {
                    name: name.clone(),
                    attrs,
                });
                if tag.self_closing {
                    events.push(MarkupEvent::EndTag { name: name.clone() });
                }
            }
            TagKind::EndTag => events.push(MarkupEvent::EndTag { name: name.clone() }),
        }

        // Script and style bodies are raw text; without a tree builder the sink
        // has to switch the tokenizer state itself.
        match (tag.kind, name.as_str()) {
            (TagKind::StartTag, "script") if !tag.self_closing => {
                TokenSinkResult::RawData(RawKind::ScriptData)
            }
            (TagKind::StartTag, "style") if !tag.self_closing => {
                TokenSinkResult::RawData(RawKind::Rawtext)
            }
            _ => TokenSinkResult::Continue,
        }
    }
}

impl TokenSink for EventCollector {
    type Handle = ();

    fn process_token(&self, token: Token, line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => return self.push_tag(tag),
            Token::CharacterTokens(text) => self.push_text(&text),
            Token::ParseError(error) => trace!("Tolerated markup error on line {line_number}: {error}"),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Tokenizes a decoded HTML document into markup events.
///
/// Tag and attribute names are lowercased by the tokenizer. Malformed markup is
/// tolerated the way browsers tolerate it; tokenization itself never fails.
///
/// # Example
/// ```
/// use texttv::markup::{MarkupEvent, tokenize};
///
/// let events = tokenize("<pre>A &amp; B</pre>");
/// assert_eq!(
///     events,
///     vec![
///         MarkupEvent::start("pre", &[]),
///         MarkupEvent::text("A & B"),
///         MarkupEvent::end("pre"),
///     ]
/// );
/// ```
pub fn tokenize(document: &str) -> Vec<MarkupEvent> {
    let tokenizer = Tokenizer::new(EventCollector::default(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(document));
    // Feeding only pauses for script execution, which this sink never requests
    while let TokenizerResult::Script(()) = tokenizer.feed(&input) {
        trace!("Resuming tokenizer after script pause");
    }
    tokenizer.end();
    tokenizer.sink.events.take()
}
