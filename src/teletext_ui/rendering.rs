// src/teletext_ui/rendering.rs - Painting pages into ANSI screen buffers

use super::colors::{clock_fg, error_fg, header_bg, header_fg, teletext_color};
use super::footer::render_footer;
use super::page::Page;
use super::utils::get_ansi_code;
use crate::constants::ui::{CONTENT_START_ROW, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use crate::error::AppError;
use crate::markup::{StyleSpec, StyledFragment, SubPage};
use crossterm::{execute, style::Print};
use reqwest::Url;
use std::io::{Stdout, Write};

const RESET: &str = "\x1b[0m";

/// How fragments are turned into terminal output
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Emit OSC 8 hyperlinks for linked fragments
    pub hyperlinks: bool,
    /// Base URL relative link targets are resolved against
    pub link_base: Option<Url>,
    /// Terminal is in raw mode, so line breaks need an explicit carriage return
    pub raw_mode: bool,
}

impl RenderOptions {
    pub fn new(hyperlinks: bool, link_base: Option<Url>, raw_mode: bool) -> Self {
        Self {
            hyperlinks,
            link_base,
            raw_mode,
        }
    }

    fn line_break(&self) -> &'static str {
        if self.raw_mode { "\x1b[0m\r\n" } else { "\x1b[0m\n" }
    }

    /// Resolves a link target against the page URL, keeping it as-is when that fails
    pub fn resolve_link(&self, href: &str) -> String {
        match &self.link_base {
            Some(base) => base
                .join(href)
                .map(|url| url.to_string())
                .unwrap_or_else(|_| href.to_string()),
            None => href.to_string(),
        }
    }
}

/// SGR sequence selecting a fragment style
pub fn style_escape(style: &StyleSpec) -> String {
    let mut code = format!(
        "\x1b[0m\x1b[38;5;{}m\x1b[48;5;{}m",
        get_ansi_code(teletext_color(style.foreground), 231),
        get_ansi_code(teletext_color(style.background), 16)
    );
    if style.is_bold() {
        code.push_str("\x1b[1m");
    }
    if style.is_underlined() {
        code.push_str("\x1b[4m");
    }
    code
}

fn paint_piece(buffer: &mut String, fragment: &StyledFragment, piece: &str, options: &RenderOptions) {
    if piece.is_empty() {
        return;
    }
    buffer.push_str(&style_escape(&fragment.style));
    match fragment.link.as_deref() {
        Some(href) if options.hyperlinks => {
            buffer.push_str(&format!(
                "\x1b]8;;{}\x07{}\x1b]8;;\x07",
                options.resolve_link(href),
                piece
            ));
        }
        _ => buffer.push_str(piece),
    }
}

/// Paints the fragments of a sub-page in order.
///
/// Each `\n` in fragment text breaks the line. When `max_lines` is given,
/// output stops before the line with that index. Returns the number of lines
/// started.
pub fn paint_subpage(
    buffer: &mut String,
    subpage: &SubPage,
    options: &RenderOptions,
    max_lines: Option<usize>,
) -> usize {
    let mut line = 0usize;

    'fragments: for fragment in subpage {
        for (index, piece) in fragment.text.split('\n').enumerate() {
            if index > 0 {
                line += 1;
                if max_lines.is_some_and(|max| line >= max) {
                    break 'fragments;
                }
                buffer.push_str(options.line_break());
            }
            paint_piece(buffer, fragment, piece, options);
        }
    }

    buffer.push_str(RESET);
    line + 1
}

/// Renders a sub-page as a standalone string, as printed in non-interactive mode
pub fn subpage_to_string(subpage: &SubPage, options: &RenderOptions) -> String {
    let mut buffer = String::new();
    paint_subpage(&mut buffer, subpage, options, None);
    buffer
}

/// Header line: page number and sub-page position on the left, clock on the right
pub fn render_header(buffer: &mut String, page: &Page, width: usize, clock: &str) {
    let position = if page.is_empty() {
        String::new()
    } else {
        format!("{}/{}", page.current_index() + 1, page.subpage_count())
    };
    let left = format!(" {} SVT Text {}", page.number(), position);
    let clock_width = clock.chars().count() + 1;
    let left_width = width.saturating_sub(clock_width);

    buffer.push_str(&format!(
        "\x1b[1;1H\x1b[48;5;{}m\x1b[38;5;{}m{:<left_width$}\x1b[38;5;{}m{} \x1b[0m",
        get_ansi_code(header_bg(), 21),
        get_ansi_code(header_fg(), 231),
        left,
        get_ansi_code(clock_fg(), 226),
        clock,
    ));
}

/// Builds the complete screen for `page` into a single buffer.
pub fn build_screen(page: &Page, options: &RenderOptions, width: u16, height: u16, clock: &str) -> String {
    let width = width as usize;
    let height = height as usize;
    let mut buffer = String::with_capacity(width * height * 4);

    buffer.push_str("\x1b[H"); // Move to home position
    buffer.push_str("\x1b[0J"); // Clear from cursor down

    render_header(&mut buffer, page, width, clock);

    // Content sits between the header and the footer row
    let content_rows = height.saturating_sub(CONTENT_START_ROW);
    buffer.push_str(&format!("\x1b[{CONTENT_START_ROW};1H"));

    let fits = width >= MIN_TERMINAL_WIDTH as usize && height >= MIN_TERMINAL_HEIGHT as usize;
    match page.current() {
        // Pages are never painted clipped
        Some(_) if !fits => {
            buffer.push_str(&format!(
                "\x1b[38;5;{}m Terminalen är för liten ({width}x{height}),{}",
                get_ansi_code(error_fg(), 196),
                options.line_break()
            ));
            buffer.push_str(&format!(
                " minst {MIN_TERMINAL_WIDTH}x{MIN_TERMINAL_HEIGHT} behövs{RESET}"
            ));
        }
        Some(subpage) => {
            paint_subpage(&mut buffer, subpage, options, Some(content_rows));
        }
        None => {
            let reason = page.load_error().unwrap_or("Sidan saknar innehåll");
            buffer.push_str(&format!(
                "\x1b[38;5;{}m Sidan {} kunde inte hämtas{}\x1b[0m",
                get_ansi_code(error_fg(), 196),
                page.number(),
                options.line_break()
            ));
            let reason: String = reason.chars().take(width.saturating_sub(2)).collect();
            buffer.push_str(&format!(" {reason}\x1b[0m"));
        }
    }

    render_footer(&mut buffer, height, width, None);
    buffer
}

/// Paints `page` to the terminal in one write.
pub fn render_page(stdout: &mut Stdout, page: &Page, options: &RenderOptions) -> Result<(), AppError> {
    let (width, height) = crossterm::terminal::size()?;
    let clock = chrono::Local::now().format("%H:%M:%S").to_string();
    let buffer = build_screen(page, options, width, height, &clock);

    execute!(stdout, crossterm::cursor::Hide, Print(buffer))?;
    stdout.flush()?;
    Ok(())
}
