//! Integration tests for page fetching and redirect handling.

use seo_meta_checker::fetch::{fetch_page, validate_and_normalize_url};
use seo_meta_checker::initialization::init_client;
use seo_meta_checker::{Config, FetchError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client() -> reqwest::Client {
    init_client(&Config {
        timeout_seconds: 5,
        ..Default::default()
    })
    .expect("Failed to build test client")
}

fn url_for(server: &MockServer, route: &str) -> reqwest::Url {
    validate_and_normalize_url(&format!("{}{}", server.uri(), route)).expect("valid mock url")
}

#[tokio::test]
async fn test_fetch_plain_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>Hello</title>"))
        .mount(&server)
        .await;

    let page = fetch_page(&test_client(), url_for(&server, "/page"), 10)
        .await
        .expect("fetch should succeed");

    assert_eq!(page.body, "<title>Hello</title>");
    assert_eq!(page.status.as_u16(), 200);
    assert_eq!(page.redirect_chain.len(), 1);
    assert_eq!(page.final_url, format!("{}/page", server.uri()));
}

#[tokio::test]
async fn test_fetch_sends_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "SEOMetaChecker/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let page = fetch_page(&test_client(), url_for(&server, "/"), 10)
        .await
        .expect("fetch should succeed");
    assert_eq!(page.body, "ok");
}

#[tokio::test]
async fn test_fetch_follows_relative_and_absolute_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/start"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/middle"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/middle"))
        .respond_with(
            ResponseTemplate::new(307)
                .insert_header("Location", format!("{}/final", server.uri()).as_str()),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/final"))
        .respond_with(ResponseTemplate::new(200).set_body_string("final body"))
        .mount(&server)
        .await;

    let page = fetch_page(&test_client(), url_for(&server, "/start"), 10)
        .await
        .expect("fetch should succeed");

    assert_eq!(page.body, "final body");
    assert_eq!(page.final_url, format!("{}/final", server.uri()));
    assert_eq!(
        page.redirect_chain,
        vec![
            format!("{}/start", server.uri()),
            format!("{}/middle", server.uri()),
            format!("{}/final", server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_fetch_stops_redirect_loop() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/loop"))
        .mount(&server)
        .await;

    let result = fetch_page(&test_client(), url_for(&server, "/loop"), 3).await;

    match result {
        Err(FetchError::TooManyRedirects { hops, .. }) => assert_eq!(hops, 3),
        other => panic!("expected TooManyRedirects, got {:?}", other),
    }
    // Initial request plus three followed hops
    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 4);
}

#[tokio::test]
async fn test_fetch_zero_hops_rejects_first_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(308).insert_header("Location", "/elsewhere"))
        .mount(&server)
        .await;

    let result = fetch_page(&test_client(), url_for(&server, "/"), 0).await;
    assert!(matches!(result, Err(FetchError::TooManyRedirects { .. })));
}

#[tokio::test]
async fn test_fetch_redirect_without_location_is_final() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(302).set_body_string("<h1>moved</h1>"))
        .mount(&server)
        .await;

    let page = fetch_page(&test_client(), url_for(&server, "/"), 10)
        .await
        .expect("fetch should succeed");
    assert_eq!(page.status.as_u16(), 302);
    assert_eq!(page.body, "<h1>moved</h1>");
}

#[tokio::test]
async fn test_fetch_error_status_still_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<title>Not Found</title>"))
        .mount(&server)
        .await;

    let page = fetch_page(&test_client(), url_for(&server, "/missing"), 10)
        .await
        .expect("a 404 page is still a fetched page");
    assert_eq!(page.status.as_u16(), 404);
    assert_eq!(page.body, "<title>Not Found</title>");
}

#[tokio::test]
async fn test_fetch_connection_refused_is_request_error() {
    // Bind then drop a listener so the port is known to be closed
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let url = validate_and_normalize_url(&format!("http://127.0.0.1:{}/", port)).expect("valid");
    let result = fetch_page(&test_client(), url, 10).await;
    assert!(matches!(result, Err(FetchError::Request(_))));
}
