//! Header glyph lookup
//!
//! Teletext header bars are drawn from mosaic cells. The source markup encodes
//! each cell as a sprite offset in the `style` attribute of a span; the digits
//! of that offset form a fill code, which maps onto one of the Unicode Block
//! Elements (<https://en.wikipedia.org/wiki/Block_Elements>).

use crate::error::AppError;

/// Maps a background-fill code to its block-drawing glyph.
///
/// # Errors
/// * `AppError::GlyphNotFound` - the code has no mapping
///
/// # Example
/// ```
/// use texttv::markup::header_glyph;
///
/// assert_eq!(header_glyph("124").unwrap(), '█');
/// assert!(header_glyph("0").is_err());
/// ```
pub fn header_glyph(code: &str) -> Result<char, AppError> {
    let glyph = match code {
        "33" | "49" => '▘',
        "34" | "98" => '▝',
        "35" | "44" | "51" => '▀',
        "36" | "48" => '▖',
        "37" | "52" | "53" => '▌',
        "38" | "54" | "58" | "62" | "102" => '▞',
        "39" | "55" | "61" => '▛',
        "40" | "96" => '▗',
        "41" | "57" | "101" | "105" | "121" => '▚',
        "42" | "104" | "106" => '▐',
        "43" | "107" | "110" => '▜',
        "45" | "109" | "116" | "117" | "125" => '▙',
        "47" | "63" | "111" | "115" | "119" | "123" | "124" | "127" => '█',
        "112" | "114" => '▄',
        "120" | "122" | "126" => '▟',
        _ => return Err(AppError::glyph_not_found(code)),
    };
    Ok(glyph)
}
