use crossterm::style::Color;

/// Extracts the 256-colour index from a crossterm colour.
/// Falls back to `fallback` for colours outside the ANSI palette.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_ansi_code() {
        assert_eq!(get_ansi_code(Color::AnsiValue(46), 0), 46);
        assert_eq!(get_ansi_code(Color::Rgb { r: 1, g: 2, b: 3 }, 231), 231);
    }
}
