use crate::markup::TeletextColor;
use crossterm::style::Color;

// Screen chrome colours
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn clock_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red

/// Maps a teletext colour onto the 256-colour palette
pub fn teletext_color(color: TeletextColor) -> Color {
    let value = match color {
        TeletextColor::White => 231,
        TeletextColor::Blue => 21,
        TeletextColor::Black => 16,
        TeletextColor::Yellow => 226,
        TeletextColor::Cyan => 51,
        TeletextColor::Red => 196,
        TeletextColor::Green => 46,
        TeletextColor::Magenta => 201,
    };
    Color::AnsiValue(value)
}
