//! SVT Text-TV terminal browser library
//!
//! Fetches teletext pages as HTML, parses them into styled sub-pages and
//! paints them in the terminal with teletext colours and block graphics.
//!
//! # Examples
//!
//! ```rust,no_run
//! use texttv::data_fetcher::{PageFetcher, PageSource};
//! use texttv::teletext_ui::{Page, PageNumber, RenderOptions, subpage_to_string};
//! use texttv::{AppError, Config};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!     let fetcher = PageFetcher::from_config(&config)?;
//!
//!     let number = PageNumber::parse("100")?;
//!     let page = Page::from_fetch_result(number, fetcher.fetch_page(number).await);
//!
//!     let options = RenderOptions::new(true, fetcher.page_base_url(number), false);
//!     for subpage in page.subpages() {
//!         println!("{}", subpage_to_string(subpage, &options));
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod markup;
pub mod teletext_ui;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{PageCache, PageFetcher, PageSource};
pub use error::AppError;
pub use markup::{StyleSpec, StyledFragment, SubPage, parse_document};
pub use teletext_ui::{Page, PageNumber, is_valid_page};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
