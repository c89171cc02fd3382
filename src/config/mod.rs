use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_PAGE_CACHE_CAPACITY, DEFAULT_PAGE_URL_TEMPLATE, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::warn;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Persistent settings, stored as `config.toml` in the platform config directory.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL of a teletext page, with `{page}` standing for the page number.
    #[serde(default = "default_page_url_template")]
    pub page_url_template: String,
    /// Custom log file; `None` logs to the default directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Per-request timeout for page fetches, in seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Number of fetched pages kept in memory. Defaults to 10.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_page_url_template() -> String {
    DEFAULT_PAGE_URL_TEMPLATE.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_cache_capacity() -> usize {
    DEFAULT_PAGE_CACHE_CAPACITY
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page_url_template: default_page_url_template(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl Config {
    /// Reads the stored settings, falling back to defaults when no file
    /// exists yet. Nothing is written. These variables take precedence over
    /// the file:
    ///
    /// - `TEXTTV_PAGE_URL` - Override the page URL template
    /// - `TEXTTV_LOG_FILE` - Override log file path
    /// - `TEXTTV_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `TEXTTV_CACHE_SIZE` - Override page cache capacity (default: 10)
    pub async fn load() -> Result<Self, AppError> {
        Self::load_or_default(&get_config_path()).await
    }

    /// Same as [`Config::load`] but reads from `path`.
    pub async fn load_or_default(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Applies environment variable overrides. Unparseable numbers are ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(template) = std::env::var(env_vars::PAGE_URL) {
            self.page_url_template = template;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(timeout) = std::env::var(env_vars::HTTP_TIMEOUT) {
            match timeout.parse::<u64>() {
                Ok(timeout) => self.http_timeout_seconds = timeout,
                Err(_) => warn!("Ignoring invalid {}: '{timeout}'", env_vars::HTTP_TIMEOUT),
            }
        }

        if let Ok(capacity) = std::env::var(env_vars::CACHE_SIZE) {
            match capacity.parse::<usize>() {
                Ok(capacity) => self.cache_capacity = capacity,
                Err(_) => warn!("Ignoring invalid {}: '{capacity}'", env_vars::CACHE_SIZE),
            }
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.page_url_template,
            &self.log_file_path,
            self.http_timeout_seconds,
            self.cache_capacity,
        )
    }

    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path()).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Prints the effective settings, one per line.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let config = Config::load().await?;

        let stored = if Path::new(&config_path).exists() {
            config_path
        } else {
            format!("{config_path} (not created yet)")
        };
        let log_file = match &config.log_file_path {
            Some(custom) => custom.clone(),
            None => format!("{}/texttv.log (default)", get_log_dir_path()),
        };

        println!("texttv settings");
        println!("  {:<14} {stored}", "config file");
        println!("  {:<14} {}", "page url", config.page_url_template);
        println!("  {:<14} {}s", "http timeout", config.http_timeout_seconds);
        println!("  {:<14} {} pages", "page cache", config.cache_capacity);
        println!("  {:<14} {log_file}", "log file");

        Ok(())
    }

    /// Writes the settings as TOML to `path`, creating missing directories.
    ///
    /// Fails with `AppError::Config` when `path` has no parent directory.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let parent = Path::new(path)
            .parent()
            .ok_or_else(|| AppError::config_error(format!("No directory to store '{path}' in")))?;

        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, toml::to_string_pretty(self)?).await?;
        Ok(())
    }

    /// Loads configuration from `path` without env overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
