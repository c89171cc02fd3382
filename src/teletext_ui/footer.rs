//! Footer rendering for the teletext screen
//!
//! The footer occupies the last terminal row and shows the key help, or a
//! status message such as the loading notice while a page is being fetched.

use super::colors::{header_bg, header_fg};
use super::page_number::PageNumber;
use super::utils::get_ansi_code;
use crate::error::AppError;
use crossterm::{execute, style::Print};
use std::io::{Stdout, Write};

/// Key help shown when no status message is active
pub const KEY_HELP: &str = "q=Avsluta ←→=Bläddra Mellanslag=Sida r=Ladda om";

/// Renders the footer into `buffer` on the last of `height` rows.
///
/// # Arguments
/// * `buffer` - The buffer to write to
/// * `height` - Terminal height; the footer goes on this (1-based) row
/// * `width` - Terminal width
/// * `status` - Optional message replacing the key help
pub fn render_footer(buffer: &mut String, height: usize, width: usize, status: Option<&str>) {
    let text = status.unwrap_or(KEY_HELP);
    let text: String = text.chars().take(width).collect();

    buffer.push_str(&format!(
        "\x1b[{};1H\x1b[48;5;{}m\x1b[38;5;{}m{:^width$}\x1b[0m",
        height.max(1),
        get_ansi_code(header_bg(), 21),
        get_ansi_code(header_fg(), 231),
        text,
        width = width
    ));
}

/// Loading notice for a page fetch
pub fn loading_message(number: PageNumber) -> String {
    format!("Hämtar sida {number}...")
}

/// Repaints only the footer with a loading notice, leaving the rest of the screen intact
pub fn render_loading_footer(stdout: &mut Stdout, number: PageNumber) -> Result<(), AppError> {
    let (width, height) = crossterm::terminal::size()?;
    let mut buffer = String::new();
    render_footer(&mut buffer, height as usize, width as usize, Some(&loading_message(number)));

    execute!(stdout, Print(buffer))?;
    stdout.flush()?;
    Ok(())
}
