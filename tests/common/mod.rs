//! Shared helpers for integration tests

#![allow(dead_code)]
#![allow(unused_macros)]

use schematics_sdk::{Authenticator, SchematicsV1, SchematicsV1Options};
use std::time::Duration;

/// A body no JSON decoder accepts
pub const MALFORMED: &str = "} this is not valid json {";

/// A client pointed at `url` that sends no credentials
pub fn client(url: &str) -> SchematicsV1 {
    SchematicsV1::new(SchematicsV1Options {
        url: Some(url.to_string()),
        authenticator: Some(Authenticator::no_auth()),
        ..Default::default()
    })
    .unwrap()
}

/// Like [`client`], with retries on and a short backoff cap
pub fn client_with_retries(url: &str) -> SchematicsV1 {
    let mut service = client(url);
    service.enable_retries(2, Duration::from_millis(50));
    service
}

/// [`client`] or [`client_with_retries`]
pub fn client_for(url: &str, retries: bool) -> SchematicsV1 {
    if retries {
        client_with_retries(url)
    } else {
        client(url)
    }
}

/// Install a test subscriber so `RUST_LOG` controls SDK logging
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Generates the failure-mode tests shared by every operation
///
/// Each entry names an operation's `_with_context` method, options that pass
/// validation, and the route those options hit. Every operation gets an
/// empty service URL test and a deadline test, with and without retries.
/// The bracketed list adds `validation` when default options lack a
/// required field, and `decode` when the operation decodes a body.
///
/// ```ignore
/// failure_modes! {
///     get_job_with_context(GetJobOptions::new("job-1")): GET "/v2/jobs/job-1" [validation, decode];
/// }
/// ```
macro_rules! failure_modes {
    (@check validation, $op:ident, $valid:expr, $method:ident, $route:literal) => {
        #[tokio::test]
        async fn default_options_fail_validation() {
            let server = MockServer::start().await;
            let service = crate::common::client(&server.uri());

            let err = service
                .$op(&Context::background(), &Default::default())
                .await
                .unwrap_err();
            assert!(matches!(err, Error::Validation { .. }), "{err:?}");
            assert!(server.received_requests().await.unwrap().is_empty());
        }
    };
    (@check decode, $op:ident, $valid:expr, $method:ident, $route:literal) => {
        #[tokio::test]
        async fn malformed_body_is_a_decode_error() {
            for retries in [false, true] {
                let server = MockServer::start().await;

                Mock::given(method(stringify!($method)))
                    .and(path($route))
                    .respond_with(
                        ResponseTemplate::new(200)
                            .insert_header("Content-Type", "application/json")
                            .set_body_string(crate::common::MALFORMED),
                    )
                    .mount(&server)
                    .await;

                let service = crate::common::client_for(&server.uri(), retries);
                let err = service
                    .$op(&Context::background(), &$valid)
                    .await
                    .unwrap_err();

                match &err {
                    Error::Deserialize { response, .. } => {
                        ::pretty_assertions::assert_eq!(response.body, crate::common::MALFORMED);
                        ::pretty_assertions::assert_eq!(response.status_code, 200);
                    }
                    other => panic!("expected decode error, got {other:?}"),
                }
            }
        }
    };
    (@op $op:ident($valid:expr): $method:ident $route:literal [$($check:ident),*]) => {
        mod $op {
            use super::*;
            use schematics_sdk::{Context, Error};
            use std::time::Duration;
            use wiremock::matchers::{method, path};
            use wiremock::{Mock, MockServer, ResponseTemplate};

            $( failure_modes!(@check $check, $op, $valid, $method, $route); )*

            #[tokio::test]
            async fn empty_service_url() {
                let mut service = crate::common::client("https://schematicsv1/api");
                service.set_service_url("").unwrap();

                let err = service
                    .$op(&Context::background(), &$valid)
                    .await
                    .unwrap_err();
                assert!(err.to_string().contains("service URL missing"), "{err}");
            }

            #[tokio::test]
            async fn deadline_exceeded() {
                for retries in [false, true] {
                    let server = MockServer::start().await;

                    Mock::given(method(stringify!($method)))
                        .and(path($route))
                        .respond_with(
                            ResponseTemplate::new(200).set_delay(Duration::from_millis(100)),
                        )
                        .mount(&server)
                        .await;

                    let service = crate::common::client_for(&server.uri(), retries);
                    let ctx = Context::with_timeout(Duration::from_millis(80));
                    let err = service.$op(&ctx, &$valid).await.unwrap_err();
                    assert!(err.to_string().contains("deadline exceeded"), "{err}");
                }
            }
        }
    };
    ($($op:ident($valid:expr): $method:ident $route:literal [$($check:ident),*];)+) => {
        $( failure_modes!(@op $op($valid): $method $route [$($check),*]); )+
    };
}
