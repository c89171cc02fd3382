pub mod fetch_utils;
pub mod http_client;
pub mod urls;

pub use http_client::create_http_client_with_timeout;
pub use urls::build_page_url;

use crate::config::Config;
use crate::error::AppError;
use crate::teletext_ui::PageNumber;
use reqwest::{Client, Url};
use std::future::Future;

/// Something that can produce the raw document of a teletext page
pub trait PageSource {
    fn fetch_page(&self, number: PageNumber) -> impl Future<Output = Result<String, AppError>>;
}

/// Fetches pages over HTTP from a URL template
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    url_template: String,
}

impl PageFetcher {
    pub fn new(client: Client, url_template: impl Into<String>) -> Self {
        Self {
            client,
            url_template: url_template.into(),
        }
    }

    /// Builds a fetcher from the configured URL template and timeout.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(client, config.page_url_template.clone()))
    }

    pub fn page_url(&self, number: PageNumber) -> String {
        build_page_url(&self.url_template, number)
    }

    /// Parsed page URL, used as the base for relative link targets
    pub fn page_base_url(&self, number: PageNumber) -> Option<Url> {
        Url::parse(&self.page_url(number)).ok()
    }
}

impl PageSource for PageFetcher {
    async fn fetch_page(&self, number: PageNumber) -> Result<String, AppError> {
        let url = self.page_url(number);
        fetch_utils::fetch_text(&self.client, &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn fetcher_for(server: &MockServer) -> PageFetcher {
        let client = create_http_client_with_timeout(DEFAULT_HTTP_TIMEOUT_SECONDS).unwrap();
        PageFetcher::new(client, format!("{}/pages/{{page}}.html", server.uri()))
    }

    fn page(value: u16) -> PageNumber {
        PageNumber::new(value).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_page_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pages/377.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<pre>Sport</pre>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = fetcher_for(&mock_server).fetch_page(page(377)).await.unwrap();
        assert_eq!(body, "<pre>Sport</pre>");
    }

    #[tokio::test]
    async fn test_fetch_page_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pages/999.html"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = fetcher_for(&mock_server).fetch_page(page(999)).await.unwrap_err();
        assert!(matches!(err, AppError::PageNotFound { ref url } if url.ends_with("/pages/999.html")));
    }

    #[tokio::test]
    async fn test_fetch_page_server_error_is_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pages/100.html"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = fetcher_for(&mock_server).fetch_page(page(100)).await.unwrap_err();
        assert!(matches!(err, AppError::HttpStatus { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_fetch_page_invalid_utf8() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pages/100.html"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x3c, 0xff, 0xfe, 0x3e]))
            .mount(&mock_server)
            .await;

        let err = fetcher_for(&mock_server).fetch_page(page(100)).await.unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }));
        assert!(err.is_fetch_failure());
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused() {
        let client = create_http_client_with_timeout(5).unwrap();
        let fetcher = PageFetcher::new(client, "http://127.0.0.1:9/{page}.html");
        let err = fetcher.fetch_page(page(100)).await.unwrap_err();
        assert!(err.is_fetch_failure());
    }

    #[test]
    fn test_page_urls() {
        let client = create_http_client_with_timeout(5).unwrap();
        let fetcher = PageFetcher::new(client, crate::constants::DEFAULT_PAGE_URL_TEMPLATE);
        assert_eq!(fetcher.page_url(page(101)), "https://www.svt.se/svttext/tv/pages/101.html");
        let base = fetcher.page_base_url(page(101)).unwrap();
        assert_eq!(base.join("102.html").unwrap().as_str(), "https://www.svt.se/svttext/tv/pages/102.html");
    }
}
