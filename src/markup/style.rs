//! Teletext style vocabulary and class-token resolution
//!
//! Teletext markup styles text through a small, closed set of CSS classes:
//! foreground colours (`W`, `Y`, `C`, ...), background colours (the same codes
//! carrying a `bg` marker, e.g. `bgB`) and text attributes (`DH` for double
//! height). Nested scopes inherit from their parent and override only the
//! components their own classes name.

use crate::error::AppError;
use std::fmt;

/// Marker identifying a background-colour class token
const BACKGROUND_MARKER: &str = "bg";

/// The eight teletext colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeletextColor {
    White,
    Blue,
    Black,
    Yellow,
    Cyan,
    Red,
    Green,
    Magenta,
}

impl TeletextColor {
    /// Looks up a colour by class token.
    ///
    /// Accepts the short teletext codes (`W`, `B`, `BK`, `Y`, `C`, `R`, `G`, `M`),
    /// full colour names and `FG_`-prefixed names, case-insensitively.
    ///
    /// # Example
    /// ```
    /// use texttv::markup::TeletextColor;
    ///
    /// assert_eq!(TeletextColor::from_token("BK"), Some(TeletextColor::Black));
    /// assert_eq!(TeletextColor::from_token("FG_GREEN"), Some(TeletextColor::Green));
    /// assert_eq!(TeletextColor::from_token("DH"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        let upper = token.to_ascii_uppercase();
        let name = upper.strip_prefix("FG_").unwrap_or(&upper);
        match name {
            "W" | "WHITE" => Some(Self::White),
            "B" | "BLUE" => Some(Self::Blue),
            "BK" | "BLACK" => Some(Self::Black),
            "Y" | "YELLOW" => Some(Self::Yellow),
            "C" | "CYAN" => Some(Self::Cyan),
            "R" | "RED" => Some(Self::Red),
            "G" | "GREEN" => Some(Self::Green),
            "M" | "MAGENTA" => Some(Self::Magenta),
            _ => None,
        }
    }

    /// Lowercase colour name
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Blue => "blue",
            Self::Black => "black",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
            Self::Red => "red",
            Self::Green => "green",
            Self::Magenta => "magenta",
        }
    }
}

impl fmt::Display for TeletextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text attribute slot of a style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAttribute {
    Normal,
    /// Teletext double height, shown as bold
    Bold,
    Underline,
}

impl TextAttribute {
    /// Looks up an attribute by class token (`0`, `DH`, `UL` or the attribute name).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "0" | "NORMAL" => Some(Self::Normal),
            "DH" | "BOLD" => Some(Self::Bold),
            "UL" | "UNDERLINE" => Some(Self::Underline),
            _ => None,
        }
    }
}

/// Fully resolved style of a text fragment.
///
/// Every style has exactly one foreground, one background and one attribute.
/// `link_underline` is the extra underline marker added to link text; it is
/// never part of an inherited scope style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleSpec {
    pub foreground: TeletextColor,
    pub background: TeletextColor,
    pub attribute: TextAttribute,
    pub link_underline: bool,
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self {
            foreground: TeletextColor::White,
            background: TeletextColor::Black,
            attribute: TextAttribute::Normal,
            link_underline: false,
        }
    }
}

impl StyleSpec {
    pub fn new(foreground: TeletextColor, background: TeletextColor, attribute: TextAttribute) -> Self {
        Self {
            foreground,
            background,
            attribute,
            link_underline: false,
        }
    }

    /// Copy of this style carrying the link underline marker
    pub fn with_link_underline(self) -> Self {
        Self {
            link_underline: true,
            ..self
        }
    }

    /// Whether the text should be drawn bold
    pub fn is_bold(&self) -> bool {
        self.attribute == TextAttribute::Bold
    }

    /// Whether the text should be drawn underlined, either by attribute or as a link
    pub fn is_underlined(&self) -> bool {
        self.link_underline || self.attribute == TextAttribute::Underline
    }
}

/// Extracts the colour part of a background class token, if the token carries the marker.
///
/// The first `bg` (any case) is removed together with a `_` or `-` separator,
/// so `bgB`, `BG_BLACK` and `bg-yellow` yield `B`, `BLACK` and `yellow`.
fn background_color_token(token: &str) -> Option<String> {
    let start = token.to_ascii_lowercase().find(BACKGROUND_MARKER)?;
    let end = start + BACKGROUND_MARKER.len();
    let mut remainder = String::with_capacity(token.len());
    remainder.push_str(&token[..start]);
    remainder.push_str(&token[end..]);
    Some(remainder.trim_matches(['_', '-']).to_string())
}

/// Resolves the style of a newly opened scope.
///
/// Starts from `parent` and applies each class token in order:
/// a known colour sets the foreground, a token with the background marker sets
/// the background, and anything else sets the attribute slot (last one wins).
///
/// # Errors
/// * `AppError::StyleLookup` - a background colour or attribute token is outside
///   the teletext vocabulary
///
/// # Example
/// ```
/// use texttv::markup::{StyleSpec, TeletextColor, TextAttribute, resolve_style};
///
/// let parent = StyleSpec::default();
/// let style = resolve_style(&parent, &["Y", "bgB", "DH"])?;
/// assert_eq!(style.foreground, TeletextColor::Yellow);
/// assert_eq!(style.background, TeletextColor::Blue);
/// assert_eq!(style.attribute, TextAttribute::Bold);
/// # Ok::<(), texttv::AppError>(())
/// ```
pub fn resolve_style(parent: &StyleSpec, class_tokens: &[&str]) -> Result<StyleSpec, AppError> {
    let mut resolved = StyleSpec::new(parent.foreground, parent.background, parent.attribute);

    for token in class_tokens {
        if let Some(color) = TeletextColor::from_token(token) {
            resolved.foreground = color;
        } else if let Some(background) = background_color_token(token) {
            resolved.background =
                TeletextColor::from_token(&background).ok_or_else(|| AppError::style_lookup(*token))?;
        } else {
            resolved.attribute =
                TextAttribute::from_token(token).ok_or_else(|| AppError::style_lookup(*token))?;
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_white_on_black() {
        let style = StyleSpec::default();
        assert_eq!(style.foreground, TeletextColor::White);
        assert_eq!(style.background, TeletextColor::Black);
        assert_eq!(style.attribute, TextAttribute::Normal);
        assert!(!style.link_underline);
    }

    #[test]
    fn test_short_color_codes() {
        let expected = [
            ("W", TeletextColor::White),
            ("B", TeletextColor::Blue),
            ("BK", TeletextColor::Black),
            ("Y", TeletextColor::Yellow),
            ("C", TeletextColor::Cyan),
            ("R", TeletextColor::Red),
            ("G", TeletextColor::Green),
            ("M", TeletextColor::Magenta),
        ];
        for (token, color) in expected {
            assert_eq!(TeletextColor::from_token(token), Some(color), "token {token}");
        }
    }

    #[test]
    fn test_color_names_are_case_insensitive() {
        assert_eq!(TeletextColor::from_token("green"), Some(TeletextColor::Green));
        assert_eq!(TeletextColor::from_token("fg_Cyan"), Some(TeletextColor::Cyan));
        assert_eq!(TeletextColor::from_token("bk"), Some(TeletextColor::Black));
        assert_eq!(TeletextColor::from_token("orange"), None);
    }

    #[test]
    fn test_background_marker_stripping() {
        assert_eq!(background_color_token("bgB").as_deref(), Some("B"));
        assert_eq!(background_color_token("BG_BLACK").as_deref(), Some("BLACK"));
        assert_eq!(background_color_token("bg-yellow").as_deref(), Some("yellow"));
        assert_eq!(background_color_token("DH"), None);
    }

    #[test]
    fn test_resolve_overrides_each_component() {
        let style = resolve_style(&StyleSpec::default(), &["C", "bgR", "DH"]).unwrap();
        assert_eq!(
            style,
            StyleSpec::new(TeletextColor::Cyan, TeletextColor::Red, TextAttribute::Bold)
        );
    }

    #[test]
    fn test_attribute_only_scope_keeps_parent_colors() {
        let parent = StyleSpec::new(TeletextColor::Yellow, TeletextColor::Blue, TextAttribute::Normal);
        let child = resolve_style(&parent, &["DH"]).unwrap();
        assert_eq!(child.foreground, TeletextColor::Yellow);
        assert_eq!(child.background, TeletextColor::Blue);
        assert_eq!(child.attribute, TextAttribute::Bold);
    }

    #[test]
    fn test_last_attribute_wins() {
        let style = resolve_style(&StyleSpec::default(), &["DH", "UL"]).unwrap();
        assert_eq!(style.attribute, TextAttribute::Underline);

        let style = resolve_style(&StyleSpec::default(), &["UL", "0"]).unwrap();
        assert_eq!(style.attribute, TextAttribute::Normal);
    }

    #[test]
    fn test_resolve_does_not_inherit_link_marker() {
        let parent = StyleSpec::default().with_link_underline();
        let child = resolve_style(&parent, &[]).unwrap();
        assert!(!child.link_underline);
    }

    #[test]
    fn test_unknown_background_is_lookup_error() {
        let err = resolve_style(&StyleSpec::default(), &["bgQ"]).unwrap_err();
        assert!(matches!(err, AppError::StyleLookup { ref token } if token == "bgQ"));
    }

    #[test]
    fn test_unknown_attribute_is_lookup_error() {
        let err = resolve_style(&StyleSpec::default(), &["blink"]).unwrap_err();
        assert!(matches!(err, AppError::StyleLookup { ref token } if token == "blink"));
    }

    #[test]
    fn test_underline_flags() {
        let plain = StyleSpec::default();
        assert!(!plain.is_underlined());
        assert!(plain.with_link_underline().is_underlined());

        let attr = StyleSpec::new(TeletextColor::White, TeletextColor::Black, TextAttribute::Underline);
        assert!(attr.is_underlined());
        assert!(!attr.is_bold());
    }
}
