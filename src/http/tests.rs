//! Tests for the HTTP transport module

use super::client::error_message;
use super::*;
use crate::auth::Authenticator;
use crate::error::Error;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(url: &str) -> BaseService {
    BaseService::new(url, Authenticator::no_auth(), ServiceConfig::default()).unwrap()
}

fn get(path: &str) -> RequestConfig {
    RequestConfig::new(Method::GET, path, "TestOperation")
}

#[test]
fn test_service_config_default() {
    let config = ServiceConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert!(!config.disable_ssl_verification);
    assert!(!config.enable_gzip);
    assert!(config.user_agent.starts_with("schematics-rust-sdk/"));
}

#[test]
fn test_service_config_builder() {
    let config = ServiceConfig::builder()
        .timeout(Duration::from_secs(5))
        .enable_gzip(true)
        .disable_ssl_verification(true)
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert!(config.enable_gzip);
    assert!(config.disable_ssl_verification);
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_retry_config_defaults_for_zero() {
    let retry = RetryConfig::new(0, Duration::ZERO);
    assert_eq!(retry.max_retries, DEFAULT_MAX_RETRIES);
    assert_eq!(retry.max_interval, DEFAULT_MAX_RETRY_INTERVAL);
    assert_eq!(retry.initial_backoff, Duration::from_secs(1));
}

#[test]
fn test_calculate_backoff_exponential() {
    let retry = RetryConfig::new(5, Duration::from_secs(30));
    assert_eq!(retry.calculate_backoff(0), Duration::from_secs(1));
    assert_eq!(retry.calculate_backoff(1), Duration::from_secs(2));
    assert_eq!(retry.calculate_backoff(2), Duration::from_secs(4));
    assert_eq!(retry.calculate_backoff(3), Duration::from_secs(8));
}

#[test]
fn test_calculate_backoff_respects_max() {
    let retry = RetryConfig::new(5, Duration::from_millis(500));
    assert_eq!(retry.initial_backoff, Duration::from_millis(500));
    assert_eq!(retry.calculate_backoff(10), Duration::from_millis(500));
}

#[test]
fn test_build_url_escapes_path_params() {
    let req = get("/v1/workspaces/{w_id}/actions/{activity_id}")
        .path_param("w_id", "ws 1/a")
        .path_param("activity_id", "act-9")
        .query("offset", 10)
        .query("limit", "5");

    let url = req.build_url("https://schematics.example.com/api/").unwrap();
    assert_eq!(
        url.as_str(),
        "https://schematics.example.com/api/v1/workspaces/ws%201%2Fa/actions/act-9?offset=10&limit=5"
    );
}

#[test]
fn test_build_url_missing_path_param() {
    let req = get("/v2/jobs/{job_id}").path_param("job_id", "");
    let err = req.build_url("https://schematics.example.com").unwrap_err();
    assert!(matches!(err, Error::Validation { field } if field == "job_id"));
}

#[test]
fn test_request_config_builder() {
    let req = RequestConfig::new(Method::PUT, "/v1/x", "Op")
        .query_opt("limit", Some(10))
        .query_opt::<i64>("offset", None)
        .header("refresh_token", "tok")
        .header_opt::<&str>("delegated_token", None)
        .json_value(json!({"key": "value"}));

    assert_eq!(req.query, vec![("limit".to_string(), "10".to_string())]);
    assert_eq!(
        req.headers,
        vec![("refresh_token".to_string(), "tok".to_string())]
    );
    assert!(matches!(req.body, Some(RequestBody::Json(_))));
}

#[test]
fn test_new_rejects_bad_url() {
    let result = BaseService::new(
        "{BAD_URL_STRING",
        Authenticator::no_auth(),
        ServiceConfig::default(),
    );
    assert!(matches!(result, Err(Error::InvalidUrl { .. })));
}

#[test]
fn test_set_service_url() {
    let mut svc = service("https://schematics.example.com");
    svc.set_service_url("https://other.example.com").unwrap();
    assert_eq!(svc.service_url(), "https://other.example.com");

    assert!(svc.set_service_url("not a url").is_err());
    assert_eq!(svc.service_url(), "https://other.example.com");

    svc.set_service_url("").unwrap();
    assert_eq!(svc.service_url(), "");
}

#[test]
fn test_enable_and_disable_retries() {
    let mut svc = service("https://schematics.example.com");
    assert!(svc.retry_config().is_none());

    svc.enable_retries(3, Duration::from_secs(10));
    assert_eq!(svc.retry_config().unwrap().max_retries, 3);

    svc.disable_retries();
    assert!(svc.retry_config().is_none());
}

#[test]
fn test_error_message_extraction() {
    let raw = |body: &str| RawResponse {
        status_code: 400,
        headers: HeaderMap::new(),
        body: body.to_string(),
    };

    assert_eq!(
        error_message(&raw(r#"{"errors":[{"message":"bad workspace"}]}"#)),
        "bad workspace"
    );
    assert_eq!(error_message(&raw(r#"{"error":"nope"}"#)), "nope");
    assert_eq!(error_message(&raw(r#"{"errorMessage":"boom"}"#)), "boom");
    assert_eq!(error_message(&raw("plain text")), "Bad Request");
}

#[tokio::test]
async fn test_request_decodes_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/version"))
        .and(header("Accept", "application/json"))
        .and(header(
            "X-IBMCloud-SDK-Analytics",
            "service_name=schematics;service_version=V1;operation_id=TestOperation",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"buildno": "42"})))
        .mount(&mock_server)
        .await;

    let svc = service(&mock_server.uri());
    let response = svc
        .request::<Value>(&Context::background(), get("/v1/version"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.result["buildno"], "42");
}

#[tokio::test]
async fn test_default_headers_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/jobs"))
        .and(header("X-Custom", "value"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let mut svc = service(&mock_server.uri());
    let mut headers = HeaderMap::new();
    headers.insert("X-Custom", HeaderValue::from_static("value"));
    svc.set_default_headers(headers);

    let response = svc
        .request::<Value>(&Context::background(), get("/v2/jobs").query("limit", 5))
        .await
        .unwrap();
    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn test_service_error_keeps_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"errors": [{"message": "workspace not found"}]})),
        )
        .mount(&mock_server)
        .await;

    let svc = service(&mock_server.uri());
    let err = svc
        .request::<Value>(&Context::background(), get("/v1/missing"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Service { status: 404, .. }));
    assert!(err.to_string().contains("workspace not found"));
    assert_eq!(err.response().unwrap().status_code, 404);
}

#[tokio::test]
async fn test_malformed_json_keeps_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/bad"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("} this is not valid json {"),
        )
        .mount(&mock_server)
        .await;

    let svc = service(&mock_server.uri());
    let err = svc
        .request::<Value>(&Context::background(), get("/v1/bad"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Deserialize { .. }));
    assert_eq!(err.response().unwrap().body, "} this is not valid json {");
}

#[tokio::test]
async fn test_empty_service_url() {
    let mut svc = service("https://schematics.example.com");
    svc.set_service_url("").unwrap();

    let err = svc
        .request::<Value>(&Context::background(), get("/v1/version"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("service URL missing"));
}

#[tokio::test]
async fn test_retry_on_500() {
    let mock_server = MockServer::start().await;

    // First two calls return 500, third succeeds
    Mock::given(method("GET"))
        .and(path("/v1/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let mut svc = service(&mock_server.uri());
    svc.enable_retries(3, Duration::from_millis(10));

    let response = svc
        .request::<Value>(&Context::background(), get("/v1/flaky"))
        .await
        .unwrap();
    assert_eq!(response.result["ok"], true);
}

#[tokio::test]
async fn test_retry_after_on_429() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/limited"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "1")
                .set_body_string("Rate limited"),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/limited"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let mut svc = service(&mock_server.uri());
    // Retry-After is capped by the max interval
    svc.enable_retries(2, Duration::from_millis(20));

    let response = svc
        .request::<Value>(&Context::background(), get("/v1/limited"))
        .await
        .unwrap();
    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn test_no_retry_when_disabled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/always-fail"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Server error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let svc = service(&mock_server.uri());
    let err = svc
        .request::<Value>(&Context::background(), get("/v1/always-fail"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn test_retries_exhausted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/always-fail"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    let mut svc = service(&mock_server.uri());
    svc.enable_retries(2, Duration::from_millis(5));

    let err = svc
        .request::<Value>(&Context::background(), get("/v1/always-fail"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Service { status: 500, .. }));
}

#[tokio::test]
async fn test_context_deadline() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(100))
                .set_body_json(json!({})),
        )
        .mount(&mock_server)
        .await;

    let mut svc = service(&mock_server.uri());
    let ctx = Context::with_timeout(Duration::from_millis(80));
    let err = svc
        .request::<Value>(&ctx, get("/v1/slow"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("deadline exceeded"));

    svc.enable_retries(3, Duration::from_millis(10));
    let ctx = Context::with_timeout(Duration::from_millis(80));
    let err = svc
        .request::<Value>(&ctx, get("/v1/slow"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("deadline exceeded"));
}

#[tokio::test]
async fn test_request_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/actions/a-1"))
        .and(header("force", "true"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let svc = service(&mock_server.uri());
    let req = RequestConfig::new(Method::DELETE, "/v2/actions/{action_id}", "DeleteAction")
        .path_param("action_id", "a-1")
        .header("force", true);
    let response = svc
        .request_no_content(&Context::background(), req)
        .await
        .unwrap();
    assert_eq!(response.status_code, 204);
}

#[tokio::test]
async fn test_empty_success_body_is_not_decoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/shared_datasets/sd-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/workspaces/ws-1/actions/a-1"))
        .respond_with(ResponseTemplate::new(202).set_body_string("  \n"))
        .mount(&mock_server)
        .await;

    let svc = service(&mock_server.uri());

    let req = RequestConfig::new(Method::DELETE, "/v2/shared_datasets/sd-1", "DeleteSharedDataset");
    let response = svc
        .request::<Value>(&Context::background(), req)
        .await
        .unwrap();
    assert_eq!(response.status_code, 204);
    assert_eq!(response.result, Value::Null);

    let req = RequestConfig::new(
        Method::DELETE,
        "/v1/workspaces/ws-1/actions/a-1",
        "DeleteWorkspaceActivity",
    );
    let response = svc
        .request::<Vec<Value>>(&Context::background(), req)
        .await
        .unwrap();
    assert_eq!(response.status_code, 202);
    assert!(response.result.is_empty());
}

#[tokio::test]
async fn test_multipart_upload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/upload"))
        .and(header_exists("content-type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"has_received_file": true})))
        .mount(&mock_server)
        .await;

    let svc = service(&mock_server.uri());
    let req = RequestConfig::new(Method::PUT, "/v1/upload", "Upload").file(FilePart {
        field: "file".to_string(),
        file_name: "template.tar".to_string(),
        content: Bytes::from_static(b"tar-bytes"),
        content_type: "application/octet-stream".to_string(),
    });

    let response = svc
        .request::<Value>(&Context::background(), req)
        .await
        .unwrap();
    assert_eq!(response.result["has_received_file"], true);

    let received = mock_server.received_requests().await.unwrap();
    let content_type = received[0].headers.get("content-type").unwrap();
    assert!(content_type
        .to_str()
        .unwrap()
        .starts_with("multipart/form-data"));
}

#[tokio::test]
async fn test_authenticator_applied() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/secure"))
        .and(header("Authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let svc = BaseService::new(
        &mock_server.uri(),
        Authenticator::bearer_token("token-123").unwrap(),
        ServiceConfig::default(),
    )
    .unwrap();

    let response = svc
        .request::<Value>(&Context::background(), get("/v1/secure"))
        .await
        .unwrap();
    assert_eq!(response.status_code, 200);
}

#[test]
fn test_base_service_debug() {
    let svc = service("https://schematics.example.com");
    let debug_str = format!("{svc:?}");
    assert!(debug_str.contains("BaseService"));
    assert!(debug_str.contains("service_url"));
}

struct Unencodable;

impl serde::Serialize for Unencodable {
    fn serialize<S: serde::Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("not encodable"))
    }
}

#[test]
fn test_json_body_encode_error() {
    let err = RequestConfig::new(Method::POST, "/v2/jobs", "CreateJob")
        .json(&Unencodable)
        .unwrap_err();

    assert!(matches!(err, Error::JsonEncode(_)));
    assert!(err.to_string().starts_with("Failed to encode request body"));
    assert!(err.response().is_none());
}
