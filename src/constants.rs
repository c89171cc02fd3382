//! Application-wide constants and configuration values
//!
//! Page range, screen layout, defaults and environment variable names.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum idle HTTP connections kept per host
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Default URL template for fetching a page. `{page}` is replaced by the page number.
pub const DEFAULT_PAGE_URL_TEMPLATE: &str = "https://www.svt.se/svttext/tv/pages/{page}.html";

/// Placeholder substituted with the page number in the URL template
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Default number of fetched pages kept in the page cache
pub const DEFAULT_PAGE_CACHE_CAPACITY: usize = 10;

/// Page numbering constants
pub mod pages {
    /// Lowest valid teletext page
    pub const FIRST: u16 = 100;

    /// Highest valid teletext page
    pub const LAST: u16 = 999;

    /// Page shown when no page is given on the command line
    pub const DEFAULT_START: &str = "100";

    /// Number of digits read by the page-number prompt
    pub const PROMPT_DIGITS: usize = 3;
}

/// UI layout constants
pub mod ui {
    /// Width of a teletext row in characters
    pub const MIN_TERMINAL_WIDTH: u16 = 40;

    /// Rows in one teletext page: its own header row plus 24 body rows
    pub const PAGE_ROWS: u16 = 25;

    /// Rows taken by the program's header and footer
    pub const CHROME_ROWS: u16 = 2;

    /// A whole page plus the header and footer rows
    pub const MIN_TERMINAL_HEIGHT: u16 = PAGE_ROWS + CHROME_ROWS;

    /// Row where page content starts (1-based, below the header)
    pub const CONTENT_START_ROW: usize = 2;

    /// Row where the page-number prompt is drawn (1-based)
    pub const PROMPT_ROW: usize = 2;

    /// Column where the page-number prompt is drawn (1-based)
    pub const PROMPT_COLUMN: usize = 2;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for page URL template override
    pub const PAGE_URL: &str = "TEXTTV_PAGE_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "TEXTTV_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "TEXTTV_HTTP_TIMEOUT";

    /// Environment variable for page cache size override
    pub const CACHE_SIZE: &str = "TEXTTV_CACHE_SIZE";
}
