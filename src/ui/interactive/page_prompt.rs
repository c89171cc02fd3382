//! Page-number prompt
//!
//! [`PagePrompt`] holds the digits typed so far and decides when input is
//! complete. [`read_page_number`] draws the prompt and feeds it key presses
//! until a valid page is entered or the prompt is cancelled.

use crate::constants::pages::PROMPT_DIGITS;
use crate::constants::ui::{PROMPT_COLUMN, PROMPT_ROW};
use crate::error::AppError;
use crate::teletext_ui::PageNumber;
use crate::teletext_ui::colors::{error_fg, header_bg, header_fg};
use crate::teletext_ui::get_ansi_code;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::{execute, style::Print};
use std::io::{Stdout, Write};
use tracing::debug;

/// Result of feeding one key to the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    /// Keep reading
    Pending,
    Submit(PageNumber),
    /// Input was complete but not a valid page; the buffer has been cleared
    Invalid(String),
    Cancel,
}

#[derive(Debug, Clone, Default)]
pub struct PagePrompt {
    digits: String,
}

impl PagePrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Digits entered so far
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Feeds one key press. Input completes at three digits or on Enter.
    pub fn handle_key(&mut self, code: KeyCode) -> PromptStep {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.digits.len() < PROMPT_DIGITS {
                    self.digits.push(c);
                }
                if self.digits.len() == PROMPT_DIGITS {
                    self.submit()
                } else {
                    PromptStep::Pending
                }
            }
            KeyCode::Backspace => {
                self.digits.pop();
                PromptStep::Pending
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => PromptStep::Cancel,
            _ => PromptStep::Pending,
        }
    }

    fn submit(&mut self) -> PromptStep {
        let input = std::mem::take(&mut self.digits);
        match PageNumber::parse(&input) {
            Ok(number) => PromptStep::Submit(number),
            Err(e) => {
                debug!("Rejected prompt input: {e}");
                PromptStep::Invalid(input)
            }
        }
    }
}

/// Prompt line as drawn over the top of the content area
pub fn prompt_line(digits: &str, rejected: Option<&str>) -> String {
    let mut line = format!(
        "\x1b[{PROMPT_ROW};{PROMPT_COLUMN}H\x1b[48;5;{}m\x1b[38;5;{}m Sida: {:<width$} \x1b[0m",
        get_ansi_code(header_bg(), 21),
        get_ansi_code(header_fg(), 231),
        digits,
        width = PROMPT_DIGITS
    );
    if let Some(input) = rejected {
        line.push_str(&format!(
            "\x1b[38;5;{}m '{}' är ingen giltig sida (100-999)\x1b[0m\x1b[K",
            get_ansi_code(error_fg(), 196),
            input
        ));
    } else {
        line.push_str("\x1b[K");
    }
    line
}

fn draw_prompt(stdout: &mut Stdout, digits: &str, rejected: Option<&str>) -> Result<(), AppError> {
    execute!(stdout, Print(prompt_line(digits, rejected)))?;
    stdout.flush()?;
    Ok(())
}

/// Reads a page number from the keyboard, re-asking until it is valid.
///
/// Returns `None` when the user cancels with Esc.
pub fn read_page_number(stdout: &mut Stdout) -> Result<Option<PageNumber>, AppError> {
    let mut prompt = PagePrompt::new();
    let mut rejected: Option<String> = None;
    draw_prompt(stdout, prompt.digits(), None)?;

    loop {
        let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }

        match prompt.handle_key(code) {
            PromptStep::Pending => {}
            PromptStep::Submit(number) => return Ok(Some(number)),
            PromptStep::Invalid(input) => rejected = Some(input),
            PromptStep::Cancel => return Ok(None),
        }
        draw_prompt(stdout, prompt.digits(), rejected.as_deref())?;
    }
}
