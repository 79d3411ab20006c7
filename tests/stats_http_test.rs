//! Stats endpoint tests using wiremock.
//!
//! These tests drive the reqwest adapter and the HTTP stats provider against
//! a local mock server, so status handling, decoding and timeouts go through
//! a real socket.

use mindful::adapters::ReqwestHttpClient;
use mindful::config::PollerConfig;
use mindful::error::FetchError;
use mindful::stats::{HttpStatsProvider, StatsPoller, StatsProvider};
use mindful::traits::HttpError;

use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATS_PATH: &str = "/api/wellness-sessions";

fn provider_for(server: &MockServer, timeout: Duration) -> HttpStatsProvider {
    let client = ReqwestHttpClient::with_timeout(timeout);
    HttpStatsProvider::new(Arc::new(client), format!("{}{}", server.uri(), STATS_PATH))
}

async fn mount_stats(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_decodes_envelope() {
    let server = MockServer::start().await;
    mount_stats(
        &server,
        serde_json::json!({
            "stats": {
                "totalSessions": 12,
                "currentStreak": 4,
                "lastCheckIn": "2024-03-10T18:30:00Z"
            }
        }),
    )
    .await;

    let stats = provider_for(&server, Duration::from_secs(5))
        .fetch()
        .await
        .unwrap();

    assert_eq!(stats.total_sessions, 12);
    assert_eq!(stats.current_streak, 4);
    assert_eq!(
        stats.last_check_in.map(|t| t.to_rfc3339()),
        Some("2024-03-10T18:30:00+00:00".to_string())
    );
}

#[tokio::test]
async fn test_fetch_first_visit() {
    let server = MockServer::start().await;
    mount_stats(
        &server,
        serde_json::json!({
            "stats": { "totalSessions": 0, "currentStreak": 0, "lastCheckIn": null }
        }),
    )
    .await;

    let stats = provider_for(&server, Duration::from_secs(5))
        .fetch()
        .await
        .unwrap();

    assert!(stats.is_first_visit());
    assert!(stats.last_check_in.is_none());
}

#[tokio::test]
async fn test_server_error_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = provider_for(&server, Duration::from_secs(5))
        .fetch()
        .await
        .unwrap_err();

    assert_eq!(
        err,
        FetchError::Transport(HttpError::ServerError {
            status: 503,
            message: "maintenance".to_string(),
        })
    );
    assert_eq!(err.error_code(), "E_FETCH_STATUS");
}

#[tokio::test]
async fn test_malformed_body_is_decode_failure() {
    let server = MockServer::start().await;
    mount_stats(&server, serde_json::json!({ "totals": [] })).await;

    let err = provider_for(&server, Duration::from_secs(5))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "stats": { "totalSessions": 1, "currentStreak": 1 } }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = provider_for(&server, Duration::from_millis(200))
        .fetch()
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "E_FETCH_TIMEOUT");
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_failure() {
    // Reserve a port, then free it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ReqwestHttpClient::with_timeout(Duration::from_secs(2));
    let provider = HttpStatsProvider::new(
        Arc::new(client),
        format!("http://127.0.0.1:{}{}", port, STATS_PATH),
    );

    let err = provider.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_poller_picks_up_live_endpoint() {
    let server = MockServer::start().await;
    mount_stats(
        &server,
        serde_json::json!({
            "stats": { "totalSessions": 7, "currentStreak": 2, "lastCheckIn": null }
        }),
    )
    .await;

    let provider = provider_for(&server, Duration::from_secs(2));
    let config = PollerConfig::default().with_interval(Duration::from_millis(50));
    let mut poller = StatsPoller::new(Arc::new(provider), &config);
    let mut updates = poller.subscribe();

    poller.start();
    tokio::time::timeout(Duration::from_secs(5), updates.changed())
        .await
        .expect("no snapshot within 5s")
        .unwrap();
    poller.stop();

    assert_eq!(poller.current_snapshot().total_sessions, 7);
    assert_eq!(poller.current_snapshot().current_streak, 2);
    assert!(poller.health().successes >= 1);

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(!requests.is_empty());
}
