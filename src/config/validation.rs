use crate::constants::PAGE_PLACEHOLDER;
use crate::error::AppError;
use std::path::Path;

/// Validates a page URL template.
///
/// # Validation Rules
/// - The template must start with `http://` or `https://`
/// - The template must contain the `{page}` placeholder
pub fn validate_url_template(template: &str) -> Result<(), AppError> {
    if template.is_empty() {
        return Err(AppError::config_error("Page URL template cannot be empty"));
    }
    if !template.starts_with("http://") && !template.starts_with("https://") {
        return Err(AppError::config_error(
            "Page URL template must start with http:// or https://",
        ));
    }
    if !template.contains(PAGE_PLACEHOLDER) {
        return Err(AppError::config_error(format!(
            "Page URL template must contain the {PAGE_PLACEHOLDER} placeholder"
        )));
    }
    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - The URL template passes [`validate_url_template`]
/// - The HTTP timeout and cache capacity are at least 1
/// - If a log file path is provided it cannot be empty, and its parent
///   directory must exist or be creatable
pub fn validate_config(
    page_url_template: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
    cache_capacity: usize,
) -> Result<(), AppError> {
    validate_url_template(page_url_template)?;

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if cache_capacity == 0 {
        return Err(AppError::InvalidCacheCapacity(cache_capacity));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_PAGE_URL_TEMPLATE;

    #[test]
    fn test_default_template_is_valid() {
        assert!(validate_url_template(DEFAULT_PAGE_URL_TEMPLATE).is_ok());
        assert!(validate_url_template("http://localhost:8080/{page}").is_ok());
    }

    #[test]
    fn test_template_rules() {
        assert!(validate_url_template("").is_err());
        assert!(validate_url_template("www.svt.se/{page}.html").is_err());
        assert!(validate_url_template("https://www.svt.se/100.html").is_err());
    }

    #[test]
    fn test_zero_values_are_rejected() {
        assert!(validate_config(DEFAULT_PAGE_URL_TEMPLATE, &None, 0, 10).is_err());
        assert!(matches!(
            validate_config(DEFAULT_PAGE_URL_TEMPLATE, &None, 30, 0),
            Err(AppError::InvalidCacheCapacity(0))
        ));
    }

    #[test]
    fn test_empty_log_path_is_rejected() {
        let result = validate_config(DEFAULT_PAGE_URL_TEMPLATE, &Some(String::new()), 30, 10);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_directory_is_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("texttv.log");
        let log_path = Some(log_path.to_string_lossy().to_string());
        assert!(validate_config(DEFAULT_PAGE_URL_TEMPLATE, &log_path, 30, 10).is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }
}
