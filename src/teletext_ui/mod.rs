// src/teletext_ui/mod.rs - Teletext page model and screen painting

pub mod colors;
pub mod footer;
pub mod page;
pub mod page_number;
pub mod rendering;
pub mod utils;

pub use page::{Page, SubPageTarget};
pub use page_number::{PageNumber, is_valid_page};
pub use rendering::{RenderOptions, build_screen, render_page, subpage_to_string};
pub use utils::get_ansi_code;
