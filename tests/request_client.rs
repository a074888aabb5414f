use std::time::Duration;

use capsheet::{FetchError, PageFetcher, RequestClient, ScrapingConfig, config::DEFAULT_USER_AGENT};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(timeout_secs: u64) -> RequestClient {
    RequestClient::new(&ScrapingConfig {
        timeout_secs,
        ..ScrapingConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn sends_browser_user_agent_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nba/utah-jazz/cap"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>jazz</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let body = client(30)
        .fetch_page(&format!("{}/nba/utah-jazz/cap", server.uri()))
        .await
        .unwrap();
    assert_eq!(body, "<html>jazz</html>");

    let requests = server.received_requests().await.unwrap();
    let user_agent = requests[0].headers.get("user-agent").unwrap();
    assert_eq!(user_agent.to_str().unwrap(), DEFAULT_USER_AGENT);
}

#[tokio::test]
async fn explicit_headers_take_precedence() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "capsheet-test"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("capsheet-test"));
    let body = client(30)
        .fetch_url_body(&server.uri(), Some(headers), None)
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn explicit_headers_replace_the_default_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("text/html"));
    client(30)
        .fetch_url_body(&server.uri(), Some(headers), None)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].headers.get("accept").unwrap().to_str().unwrap(),
        "text/html"
    );
    assert!(requests[0].headers.get("user-agent").is_none());
}

#[tokio::test]
async fn error_status_is_a_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("partial page"))
        .mount(&server)
        .await;

    let url = format!("{}/nba/miami-heat/cap", server.uri());
    match client(30).fetch_page(&url).await {
        Err(FetchError::Status { url: failed, status }) => {
            assert_eq!(failed, url);
            assert_eq!(status.as_u16(), 503);
        }
        other => panic!("expected status failure, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let result = client(1).fetch_page(&server.uri()).await;
    assert!(matches!(result, Err(FetchError::Transport { .. })));
}

#[tokio::test]
async fn per_call_timeout_overrides_configured_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let result = client(30)
        .fetch_url_body(&server.uri(), None, Some(Duration::from_secs(1)))
        .await;
    assert!(matches!(result, Err(FetchError::Transport { .. })));
}

#[tokio::test]
async fn zero_configured_timeout_still_allows_fast_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("quick"))
        .mount(&server)
        .await;

    let body = client(0).fetch_page(&server.uri()).await.unwrap();
    assert_eq!(body, "quick");
}

#[tokio::test]
async fn unparseable_url_is_rejected_before_sending() {
    let result = client(30).fetch_page("not a url").await;
    assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
}
