//! Teletext page numbers and their validation

use crate::constants::pages::{FIRST, LAST};
use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// A validated teletext page number in `[100, 999]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(u16);

impl PageNumber {
    /// Wraps a numeric page, rejecting values outside the valid range.
    pub fn new(value: u16) -> Result<Self, AppError> {
        if (FIRST..=LAST).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AppError::invalid_page_number(value.to_string()))
        }
    }

    /// Parses user input into a page number.
    ///
    /// The input must be non-empty, consist only of ASCII digits and name a
    /// value in `[100, 999]`.
    ///
    /// # Example
    /// ```
    /// use texttv::teletext_ui::PageNumber;
    ///
    /// assert_eq!(PageNumber::parse("377")?.get(), 377);
    /// assert!(PageNumber::parse("99").is_err());
    /// assert!(PageNumber::parse("1000").is_err());
    /// assert!(PageNumber::parse("1a0").is_err());
    /// # Ok::<(), texttv::AppError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, AppError> {
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::invalid_page_number(input));
        }
        match input.parse::<u64>() {
            Ok(value) if (u64::from(FIRST)..=u64::from(LAST)).contains(&value) => {
                Ok(Self(value as u16))
            }
            _ => Err(AppError::invalid_page_number(input)),
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Following page, or `None` at the last page
    pub fn next(self) -> Option<Self> {
        (self.0 < LAST).then(|| Self(self.0 + 1))
    }

    /// Preceding page, or `None` at the first page
    pub fn previous(self) -> Option<Self> {
        (self.0 > FIRST).then(|| Self(self.0 - 1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self(FIRST)
    }
}

impl FromStr for PageNumber {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether `input` is a valid page number
pub fn is_valid_page(input: &str) -> bool {
    PageNumber::parse(input).is_ok()
}
