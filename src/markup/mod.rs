//! Teletext markup handling: tokenizing, style resolution, header glyphs and parsing into sub-pages

pub mod glyphs;
pub mod parser;
pub mod style;
pub mod tokenizer;

pub use glyphs::header_glyph;
pub use parser::{MarkupParser, StyledFragment, SubPage, parse_document};
pub use style::{StyleSpec, TeletextColor, TextAttribute, resolve_style};
pub use tokenizer::{MarkupEvent, tokenize};
