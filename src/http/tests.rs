//! Tests for the HTTP module

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::pagination::{ActiveLotPage, Page};
use crate::types::{LotSort, SortOrder};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Status {
    ok: bool,
}

/// Clock frozen at a fixed instant that records waits instead of sleeping
#[derive(Debug)]
struct FakeClock {
    now: i64,
    sleeps: Mutex<Vec<Duration>>,
}

impl FakeClock {
    fn at(now: i64) -> Arc<Self> {
        Arc::new(Self {
            now,
            sleeps: Mutex::new(Vec::new()),
        })
    }

    fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clock for FakeClock {
    fn now_millis(&self) -> i64 {
        self.now
    }

    async fn sleep(&self, duration: Duration, cancel: &CancellationToken) -> WaitOutcome {
        self.sleeps.lock().unwrap().push(duration);
        if cancel.is_cancelled() {
            WaitOutcome::Cancelled
        } else {
            WaitOutcome::Elapsed
        }
    }
}

fn test_config(base_url: impl Into<String>) -> ClientConfig {
    ClientConfig::builder()
        .base_url(base_url)
        .region("EU")
        .access_token("test-token")
        .build()
}

fn test_client(server: &MockServer) -> HttpClient {
    HttpClient::new(&test_config(server.uri())).unwrap()
}

fn rate_limited(reset_at_millis: i64) -> ResponseTemplate {
    ResponseTemplate::new(429)
        .insert_header("X-Ratelimit-Limit", "400")
        .insert_header("X-Ratelimit-Remaining", "0")
        .insert_header("X-Ratelimit-Reset", reset_at_millis.to_string())
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// ============================================================================
// URL Building
// ============================================================================

#[test]
fn test_url_for_regional() {
    let client = HttpClient::new(&test_config("https://eapi.stalcraft.net")).unwrap();
    let url = client
        .url_for(&ResourcePath::regional(["clan", "abc", "info"]))
        .unwrap();
    assert_eq!(url.as_str(), "https://eapi.stalcraft.net/EU/clan/abc/info");
}

#[test]
fn test_url_for_global() {
    let client = HttpClient::new(&test_config("https://eapi.stalcraft.net/")).unwrap();
    let url = client.url_for(&ResourcePath::global(["regions"])).unwrap();
    assert_eq!(url.as_str(), "https://eapi.stalcraft.net/regions");
}

#[test]
fn test_url_for_escapes_segments() {
    let client = HttpClient::new(&test_config("https://eapi.stalcraft.net")).unwrap();
    let url = client
        .url_for(&ResourcePath::regional([
            "character",
            "by-name",
            "Big Boss/2",
            "profile",
        ]))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://eapi.stalcraft.net/EU/character/by-name/Big%20Boss%2F2/profile"
    );
}

#[test]
fn test_url_for_with_cursor_query() {
    let client = HttpClient::new(&test_config("https://eapi.stalcraft.net")).unwrap();
    let page = ActiveLotPage::new(20).sorted_by(LotSort::CurrentPrice, SortOrder::Desc);
    let url = client
        .url_for(&ResourcePath::regional(["auction", "y1q9", "lots"]).with_cursor(&page))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://eapi.stalcraft.net/EU/auction/y1q9/lots?limit=20&offset=0&order=desc&sort=current_price"
    );
}

#[test]
fn test_with_region() {
    let client = HttpClient::new(&test_config("https://eapi.stalcraft.net"))
        .unwrap()
        .with_region("RU");
    assert_eq!(client.region(), "RU");
    let url = client.url_for(&ResourcePath::regional(["emission"])).unwrap();
    assert_eq!(url.as_str(), "https://eapi.stalcraft.net/RU/emission");
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = ClientConfig::builder().base_url("http://localhost").build();
    assert!(matches!(
        HttpClient::new(&config),
        Err(Error::Config { .. })
    ));
}

#[test]
fn test_http_client_debug_hides_token() {
    let client = HttpClient::new(&test_config("https://eapi.stalcraft.net")).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("HttpClient"));
    assert!(!debug.contains("test-token"));
}

// ============================================================================
// Success Path
// ============================================================================

#[tokio::test]
async fn test_execute_sends_auth_and_accept_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let status: Status = client
        .execute_with_retry(&ResourcePath::regional(["emission"]))
        .await
        .unwrap();

    assert_eq!(status, Status { ok: true });
}

#[tokio::test]
async fn test_execute_sends_cursor_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EU/clans"))
        .and(query_param("offset", "40"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let status: Status = client
        .execute_with_retry(&ResourcePath::regional(["clans"]).with_cursor(&Page::at(40, 20)))
        .await
        .unwrap();

    assert!(status.ok);
}

// ============================================================================
// Rate Limit Retry
// ============================================================================

#[tokio::test]
async fn test_rate_limit_waits_until_reset_then_retries() {
    let mock_server = MockServer::start().await;
    let start = Instant::now();

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(rate_limited(now_millis() + 50))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let status: Status = client
        .execute_with_retry(&ResourcePath::regional(["emission"]))
        .await
        .unwrap();

    assert!(status.ok);
    assert!(start.elapsed() >= Duration::from_millis(40));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_rate_limit_wait_uses_clock() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(rate_limited(1_000_250))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let clock = FakeClock::at(1_000_000);
    let client = test_client(&mock_server).with_clock(clock.clone());
    let status: Status = client
        .execute_with_retry(&ResourcePath::regional(["emission"]))
        .await
        .unwrap();

    assert!(status.ok);
    assert_eq!(clock.sleeps(), vec![Duration::from_millis(250)]);
}

#[tokio::test]
async fn test_rate_limit_retries_without_ceiling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EU/clans"))
        .respond_with(rate_limited(1_000_010))
        .up_to_n_times(5)
        .expect(5)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/EU/clans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let clock = FakeClock::at(1_000_000);
    let client = test_client(&mock_server).with_clock(clock.clone());
    let status: Status = client
        .execute_with_retry(&ResourcePath::regional(["clans"]))
        .await
        .unwrap();

    assert!(status.ok);
    assert_eq!(clock.sleeps().len(), 5);
}

#[tokio::test]
async fn test_rate_limit_reset_in_past_waits_zero() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(rate_limited(500))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let clock = FakeClock::at(1_000_000);
    let client = test_client(&mock_server).with_clock(clock.clone());
    let _: Status = client
        .execute_with_retry(&ResourcePath::regional(["emission"]))
        .await
        .unwrap();

    assert_eq!(clock.sleeps(), vec![Duration::ZERO]);
}

#[tokio::test]
async fn test_execute_once_surfaces_rate_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(rate_limited(1_234))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .execute_once::<Status>(&ResourcePath::regional(["emission"]))
        .await
        .unwrap_err();

    match err {
        Error::RateLimited(signal) => {
            assert_eq!(signal.limit, 400);
            assert_eq!(signal.remaining, 0);
            assert_eq!(signal.reset_at_millis, 1_234);
        }
        other => panic!("expected rate limit, got {other:?}"),
    }
}

// ============================================================================
// Fatal Errors
// ============================================================================

#[tokio::test]
async fn test_rate_limit_missing_header_is_protocol_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("X-Ratelimit-Limit", "400")
                .insert_header("X-Ratelimit-Reset", (now_millis() + 50).to_string()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let clock = FakeClock::at(0);
    let client = test_client(&mock_server).with_clock(clock.clone());
    let err = client
        .execute_with_retry::<Status>(&ResourcePath::regional(["emission"]))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Protocol { ref header, .. } if header == HEADER_REMAINING));
    assert!(clock.sleeps().is_empty());
}

#[tokio::test]
async fn test_api_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EU/clan/missing/info"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "title": "not found",
            "status": 404,
            "details": {}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .execute_with_retry::<Status>(&ResourcePath::regional(["clan", "missing", "info"]))
        .await
        .unwrap_err();

    assert_eq!(err.api_status(), Some(404));
    match err {
        Error::Api(api) => {
            assert_eq!(api.title, "not found");
            assert!(api.details.is_empty());
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_with_null_details() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "title": "bad request",
            "status": 400,
            "details": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .execute_with_retry::<Status>(&ResourcePath::regional(["emission"]))
        .await
        .unwrap_err();

    match err {
        Error::Api(api) => {
            assert_eq!(api.title, "bad request");
            assert_eq!(api.status, 400);
            assert!(api.details.is_empty());
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
            "title": "maintenance",
            "status": 503,
            "details": {"until": "2024-01-01T00:00:00Z"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .execute_with_retry::<Status>(&ResourcePath::regional(["emission"]))
        .await
        .unwrap_err();

    match err {
        Error::Api(api) => {
            assert_eq!(api.status, 503);
            assert_eq!(api.details["until"], "2024-01-01T00:00:00Z");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .execute_with_retry::<Status>(&ResourcePath::regional(["emission"]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Decode {
            target: "error response body",
            ..
        }
    ));
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": "yes"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .execute_with_retry::<Status>(&ResourcePath::regional(["emission"]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Decode {
            target: "response body",
            ..
        }
    ));
}

#[tokio::test]
async fn test_transport_error() {
    let client = HttpClient::new(&test_config("http://127.0.0.1:1")).unwrap();
    let err = client
        .execute_with_retry::<Status>(&ResourcePath::regional(["emission"]))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}

// ============================================================================
// Cancellation
// ============================================================================

#[tokio::test]
async fn test_cancel_during_rate_limit_wait() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(rate_limited(now_millis() + 60_000))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    let client = test_client(&mock_server).with_cancellation_token(token.clone());

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let start = Instant::now();
    let err = client
        .execute_with_retry::<Status>(&ResourcePath::regional(["emission"]))
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(start.elapsed() < Duration::from_secs(30));
}

#[tokio::test]
async fn test_cancel_in_flight_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/EU/emission"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"ok": true}))
                .set_delay(Duration::from_secs(20)),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let canceller = client.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel_all_requests();
    });

    let start = Instant::now();
    let err = client
        .execute_with_retry::<Status>(&ResourcePath::regional(["emission"]))
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(start.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn test_already_cancelled_token_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.cancel_all_requests();

    let err = client
        .execute_with_retry::<Status>(&ResourcePath::regional(["emission"]))
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
}
