//! HTTP client creation

use reqwest::Client;
use std::time::Duration;

/// Creates the HTTP client used for page fetches.
///
/// The request timeout is the only transport setting; it comes from the
/// configuration (default 30 seconds).
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_configured_timeout() {
        assert!(create_http_client_with_timeout(5).is_ok());
        assert!(create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS).is_ok());
    }
}
