//! Terminal setup, cleanup and size checking for interactive mode

use crate::constants::ui::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use crate::error::AppError;
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{Stdout, stdout};

/// Configuration for terminal management operations
#[derive(Debug, Clone, Default)]
pub struct TerminalConfig {
    /// Keep the normal screen and cooked mode so log output stays readable
    pub debug_mode: bool,
}

/// Rejects terminals smaller than one teletext page plus header and footer.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), AppError> {
    if width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT {
        return Err(AppError::TerminalTooSmall {
            width,
            height,
            min_width: MIN_TERMINAL_WIDTH,
            min_height: MIN_TERMINAL_HEIGHT,
        });
    }
    Ok(())
}

/// Terminal manager responsible for setup and cleanup operations
#[derive(Debug, Default)]
pub struct TerminalManager {
    config: TerminalConfig,
}

impl TerminalManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TerminalConfig) -> Self {
        Self { config }
    }

    /// Checks the terminal size, then enters raw mode and the alternate screen.
    /// Returns the stdout handle used for rendering.
    pub fn setup_terminal(&self) -> Result<Stdout, AppError> {
        let (width, height) = crossterm::terminal::size()?;
        check_terminal_size(width, height)?;

        let mut stdout = stdout();
        if !self.config.debug_mode {
            enable_raw_mode()?;
            execute!(stdout, EnterAlternateScreen)?;
        }
        Ok(stdout)
    }

    /// Restores the terminal to its original state
    pub fn cleanup_terminal(&self, mut stdout: Stdout) -> Result<(), AppError> {
        execute!(stdout, cursor::Show)?;
        if !self.config.debug_mode {
            disable_raw_mode()?;
            execute!(stdout, LeaveAlternateScreen)?;
        }
        Ok(())
    }

    /// Whether output goes to a raw-mode terminal
    pub fn is_raw(&self) -> bool {
        !self.config.debug_mode
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_manager_default() {
        let manager = TerminalManager::new();
        assert!(!manager.config().debug_mode);
        assert!(manager.is_raw());
    }

    #[test]
    fn test_debug_mode_is_not_raw() {
        let manager = TerminalManager::with_config(TerminalConfig { debug_mode: true });
        assert!(manager.config().debug_mode);
        assert!(!manager.is_raw());
    }

    #[test]
    fn test_size_check_accepts_minimum() {
        assert!(check_terminal_size(MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT).is_ok());
        assert!(check_terminal_size(200, 60).is_ok());
    }

    #[test]
    fn test_size_check_rejects_small_terminals() {
        let err = check_terminal_size(39, 30).unwrap_err();
        assert!(err.to_string().starts_with("Terminal not big enough"));
        assert!(check_terminal_size(80, MIN_TERMINAL_HEIGHT - 1).is_err());
    }

    #[test]
    fn test_size_check_rejects_terminal_shorter_than_a_page() {
        // 24 rows leave 22 for content, too few for a 25-row page
        let err = check_terminal_size(40, 24).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Terminal not big enough: 40x24, need at least 40x27"
        );
    }
}
