//! Single-attempt page fetching with status and transport error mapping

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` once and decodes the body as UTF-8.
///
/// There is no retry: a failure is reported to the caller, which shows it on
/// the page and lets the user reload.
///
/// # Errors
/// * `AppError::NetworkTimeout` / `AppError::NetworkConnection` - transport failures
/// * `AppError::PageNotFound` - the server answered 404
/// * `AppError::HttpStatus` - any other non-success status
/// * `AppError::Decode` - the body is not valid UTF-8
#[instrument(skip(client))]
pub(super) async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching page from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::Fetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::page_not_found(url),
            _ => AppError::http_status(status_code, reason, url),
        });
    }

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to read response body from URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else {
                AppError::Fetch(e)
            });
        }
    };
    debug!("Response length: {} bytes", body.len());

    String::from_utf8(body.to_vec()).map_err(|e| {
        error!("Response from {} is not UTF-8: {}", url, e);
        AppError::decode(e.to_string(), url)
    })
}
