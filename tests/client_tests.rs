//! Interceptor chain and dispatch behavior of the configured client

mod common;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Request, Response, StatusCode};
use shorturl_client::infrastructure::network::interceptors::{ENDPOINT_NOT_FOUND, SERVER_ERROR};
use shorturl_client::{ApiClient, ApiError, RequestInterceptor, ResponseInterceptor};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn success_passes_through_unchanged() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "req-1")
                .set_body_string(r#"{"status":"ok","message":"Short URL service is running"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (logs, _guard) = common::capture_logs();
    let client = common::client(&mock_server.uri());

    let response = client.get("/health").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-request-id").unwrap(), "req-1");
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"status":"ok","message":"Short URL service is running"}"#
    );
    assert_eq!(logs.contents(), "");
}

#[tokio::test]
async fn every_request_is_json() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/items/1"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "name": "x" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client(&mock_server.uri());
    client.get("health").await.unwrap();
    let response = client
        .put("/api/items/1", &serde_json::json!({ "name": "x" }))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    mock_server.verify().await;
}

#[tokio::test]
async fn not_found_logs_once_and_keeps_response() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"error":"Short URL not found"}"#),
        )
        .mount(&mock_server)
        .await;

    let (logs, _guard) = common::capture_logs();
    let client = common::client(&mock_server.uri());

    let err = client.get("/api/stats/missing").await.unwrap_err();

    assert_eq!(logs.count(ENDPOINT_NOT_FOUND), 1);
    assert_eq!(logs.count(SERVER_ERROR), 0);

    let response = err.response().expect("404 should carry the response");
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.url.path(), "/api/stats/missing");
    assert_eq!(response.text(), r#"{"error":"Short URL not found"}"#);
    assert_eq!(err.message(), "Short URL not found");
}

#[tokio::test]
async fn server_error_logs_once_and_keeps_response() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shorten"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let (logs, _guard) = common::capture_logs();
    let client = common::client(&mock_server.uri());

    let err = client
        .post("/api/shorten", &serde_json::json!({ "url": "https://example.com" }))
        .await
        .unwrap_err();

    assert_eq!(logs.count(SERVER_ERROR), 1);
    assert_eq!(logs.count(ENDPOINT_NOT_FOUND), 0);
    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    assert_eq!(err.response().unwrap().text(), "maintenance");
}

#[tokio::test]
async fn other_client_errors_are_not_logged() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(409).set_body_string(r#"{"error":"Custom code already exists"}"#),
        )
        .mount(&mock_server)
        .await;

    let (logs, _guard) = common::capture_logs();
    let client = common::client(&mock_server.uri());

    let err = client
        .post("/api/shorten", &serde_json::json!({ "url": "https://example.com" }))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::CONFLICT));
    assert_eq!(logs.count(ENDPOINT_NOT_FOUND), 0);
    assert_eq!(logs.count(SERVER_ERROR), 0);
}

#[tokio::test]
async fn timeout_fails_without_status_diagnostics() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let (logs, _guard) = common::capture_logs();
    let client = ApiClient::builder(common::settings(&mock_server.uri()))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client.get("/slow").await.unwrap_err();

    assert!(err.is_timeout());
    assert!(matches!(err, ApiError::Timeout { timeout, .. } if timeout == Duration::from_millis(200)));
    assert_eq!(err.status(), None);
    assert_eq!(logs.count(ENDPOINT_NOT_FOUND), 0);
    assert_eq!(logs.count(SERVER_ERROR), 0);
}

#[tokio::test]
async fn default_client_uses_ten_second_timeout() {
    let client = common::client("http://localhost:8080");
    assert_eq!(client.timeout(), Duration::from_millis(10_000));
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn connection_failure_is_propagated_without_diagnostics() {
    // Nothing listens on the discard port
    let (logs, _guard) = common::capture_logs();
    let client = common::client("http://127.0.0.1:9");

    let err = client.get("/health").await.unwrap_err();

    assert!(matches!(err, ApiError::Http(_)));
    assert_eq!(err.status(), None);
    assert_eq!(logs.count(ENDPOINT_NOT_FOUND), 0);
    assert_eq!(logs.count(SERVER_ERROR), 0);
}

struct BearerToken(&'static str);

#[async_trait]
impl RequestInterceptor for BearerToken {
    async fn on_request(&self, mut request: Request) -> Result<Request, ApiError> {
        let value = HeaderValue::from_str(&format!("Bearer {}", self.0))
            .map_err(|e| ApiError::Interceptor(e.to_string()))?;
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(request)
    }
}

struct MissingToken;

#[async_trait]
impl RequestInterceptor for MissingToken {
    async fn on_request(&self, _request: Request) -> Result<Request, ApiError> {
        Err(ApiError::Interceptor("no token available".to_string()))
    }
}

#[tokio::test]
async fn request_hook_can_add_headers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("authorization", "Bearer secret"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder(common::settings(&mock_server.uri()))
        .request_interceptor(BearerToken("secret"))
        .build()
        .unwrap();

    client.get("/health").await.unwrap();
    mock_server.verify().await;
}

#[tokio::test]
async fn failing_request_hook_prevents_dispatch() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder(common::settings(&mock_server.uri()))
        .request_interceptor(MissingToken)
        .build()
        .unwrap();

    let err = client.get("/health").await.unwrap_err();
    assert!(matches!(err, ApiError::Interceptor(ref m) if m == "no token available"));

    mock_server.verify().await;
}

#[derive(Clone, Default)]
struct Counting {
    ok: Arc<AtomicUsize>,
    failed: Arc<AtomicUsize>,
}

#[async_trait]
impl ResponseInterceptor for Counting {
    async fn on_response(&self, response: Response) -> Result<Response, ApiError> {
        self.ok.fetch_add(1, Ordering::SeqCst);
        Ok(response)
    }

    async fn on_error(&self, error: ApiError) -> ApiError {
        self.failed.fetch_add(1, Ordering::SeqCst);
        error
    }
}

#[tokio::test]
async fn response_hooks_see_every_outcome() {
    let mock_server = MockServer::start().await;
    Mock::given(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let counting = Counting::default();
    let client = ApiClient::builder(common::settings(&mock_server.uri()))
        .response_interceptor(counting.clone())
        .build()
        .unwrap();

    client.get("/ok").await.unwrap();
    let err = client.get("/gone").await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(counting.ok.load(Ordering::SeqCst), 1);
    assert_eq!(counting.failed.load(Ordering::SeqCst), 1);
}

struct RejectEverything;

#[async_trait]
impl ResponseInterceptor for RejectEverything {
    async fn on_response(&self, _response: Response) -> Result<Response, ApiError> {
        Err(ApiError::InvalidInput("rejected by hook".to_string()))
    }
}

#[tokio::test]
async fn failing_response_hook_reaches_later_error_hooks() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let counting = Counting::default();
    let client = ApiClient::builder(common::settings(&mock_server.uri()))
        .response_interceptor(RejectEverything)
        .response_interceptor(counting.clone())
        .build()
        .unwrap();

    let err = client.get("/anything").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
    assert_eq!(counting.ok.load(Ordering::SeqCst), 0);
    assert_eq!(counting.failed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn without_defaults_nothing_is_logged() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let (logs, _guard) = common::capture_logs();
    let client = ApiClient::builder(common::settings(&mock_server.uri()))
        .without_default_interceptors()
        .build()
        .unwrap();

    let err = client.delete("/api/items/1").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(logs.count(SERVER_ERROR), 0);
}
