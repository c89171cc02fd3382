use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("Page not found (404): {url}")]
    PageNotFound { url: String },

    #[error("Server responded with error ({status}): {message} (URL: {url})")]
    HttpStatus {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching page from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("Page body is not valid UTF-8: {message} (URL: {url})")]
    Decode { message: String, url: String },

    // Markup errors
    #[error("Unknown teletext style token: '{token}'")]
    StyleLookup { token: String },

    #[error("Closing </{tag}> without a matching open scope")]
    UnbalancedScope { tag: String },

    #[error("No header glyph mapped for fill code '{code}'")]
    GlyphNotFound { code: String },

    // Boundary validation
    #[error("'{input}' is not a valid page. [100, 999] is the valid range.")]
    InvalidPageNumber { input: String },

    #[error("Page cache capacity must be at least 1, got {0}")]
    InvalidCacheCapacity(usize),

    #[error("Terminal not big enough: {width}x{height}, need at least {min_width}x{min_height}")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a page not found error
    pub fn page_not_found(url: impl Into<String>) -> Self {
        Self::PageNotFound { url: url.into() }
    }

    /// Create an HTTP status error for any non-success status other than 404
    pub fn http_status(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a body decode error
    pub fn decode(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a style lookup error for a token outside the teletext vocabulary
    pub fn style_lookup(token: impl Into<String>) -> Self {
        Self::StyleLookup {
            token: token.into(),
        }
    }

    /// Create a glyph lookup error for an unmapped fill code
    pub fn glyph_not_found(code: impl Into<String>) -> Self {
        Self::GlyphNotFound { code: code.into() }
    }

    /// Create an invalid page number error
    pub fn invalid_page_number(input: impl Into<String>) -> Self {
        Self::InvalidPageNumber {
            input: input.into(),
        }
    }

    /// Check if the error came from fetching the page (transport, status or decode)
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            AppError::Fetch(_)
                | AppError::PageNotFound { .. }
                | AppError::HttpStatus { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::Decode { .. }
        )
    }

    /// Check if the error came from interpreting the page markup
    pub fn is_markup_failure(&self) -> bool {
        matches!(
            self,
            AppError::StyleLookup { .. } | AppError::UnbalancedScope { .. }
        )
    }
}
