//! Interactive UI
//!
//! - `input_handler`: key press to action mapping
//! - `navigation_manager`: page and sub-page navigation over the page cache
//! - `page_prompt`: page-number entry
//! - `terminal_manager`: raw mode, alternate screen and size checks
//! - `core`: the main loop

mod core;
pub mod input_handler;
pub mod navigation_manager;
pub mod page_prompt;
pub mod terminal_manager;

pub use core::{InteractiveOptions, run_interactive_ui};
pub use navigation_manager::{NavEvent, NavOutcome, NavigationManager};
