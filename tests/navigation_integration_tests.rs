//! Navigation against a mocked page server

use texttv::data_fetcher::api::create_http_client_with_timeout;
use texttv::data_fetcher::{PageCache, PageFetcher};
use texttv::teletext_ui::PageNumber;
use texttv::ui::{NavEvent, NavOutcome, NavigationManager};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn number(value: u16) -> PageNumber {
    PageNumber::new(value).unwrap()
}

async fn serve(server: &MockServer, page: u16, body: &str, expected_fetches: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/pages/{page}.html")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_fetches)
        .mount(server)
        .await;
}

fn navigation(server: &MockServer, capacity: usize, start: u16) -> NavigationManager<PageFetcher> {
    let client = create_http_client_with_timeout(5).unwrap();
    let fetcher = PageFetcher::new(client, format!("{}/pages/{{page}}.html", server.uri()));
    NavigationManager::new(fetcher, PageCache::new(capacity).unwrap(), number(start))
}

#[tokio::test]
async fn test_browse_through_subpages_and_pages() {
    let server = MockServer::start().await;
    serve(&server, 100, "<pre>100a</pre><pre>100b</pre>", 1).await;
    serve(&server, 101, "<pre>101a</pre>", 1).await;

    let mut nav = navigation(&server, 10, 100);
    assert_eq!(nav.current_page().await.current().unwrap().plain_text(), "100a");

    assert_eq!(nav.handle(NavEvent::Advance).await, NavOutcome::Moved);
    assert_eq!(nav.current_page().await.current().unwrap().plain_text(), "100b");

    assert_eq!(nav.handle(NavEvent::Advance).await, NavOutcome::Moved);
    assert_eq!(nav.current_number(), number(101));

    assert_eq!(nav.handle(NavEvent::Retreat).await, NavOutcome::Moved);
    assert_eq!(nav.current_page().await.current().unwrap().plain_text(), "100b");
}

#[tokio::test]
async fn test_missing_page_shows_error_and_reload_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pages/150.html"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&server)
        .await;

    let mut nav = navigation(&server, 10, 100);
    nav.handle(NavEvent::Goto(number(150))).await;

    let page = nav.current_page().await;
    assert!(page.is_empty());
    assert!(page.load_error().unwrap().contains("404"));

    assert_eq!(nav.handle(NavEvent::Reload).await, NavOutcome::Moved);
    assert!(nav.current_page().await.load_error().is_some());
}

#[tokio::test]
async fn test_evicted_page_is_fetched_again() {
    let server = MockServer::start().await;
    serve(&server, 200, "<pre>200</pre>", 2).await;
    serve(&server, 201, "<pre>201</pre>", 1).await;
    serve(&server, 202, "<pre>202</pre>", 1).await;

    let mut nav = navigation(&server, 2, 200);
    nav.current_page().await;
    nav.handle(NavEvent::Goto(number(201))).await;
    nav.handle(NavEvent::Goto(number(202))).await;
    assert!(!nav.cache().contains(number(200)));

    nav.handle(NavEvent::Goto(number(200))).await;
    assert_eq!(nav.cache().len(), 2);
    assert_eq!(nav.current_page().await.current().unwrap().plain_text(), "200");
}
