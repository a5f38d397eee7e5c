//! Base service: the transport every operation goes through
//!
//! Handles:
//! - Service URL validation and request URL construction
//! - Authentication and SDK headers
//! - Opt-in retries with exponential backoff and `Retry-After`
//! - Status and body decoding into typed results or structured errors

use super::context::Context;
use super::request::{RequestBody, RequestConfig};
use super::response::{DetailedResponse, RawResponse};
use crate::auth::Authenticator;
use crate::error::{is_retryable_status, Error, Result};
use crate::types::JsonValue;
use reqwest::header::{HeaderMap, ACCEPT, RETRY_AFTER};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Header carrying per-operation SDK analytics
const ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

/// Default number of retries when `enable_retries` gets zero
pub const DEFAULT_MAX_RETRIES: u32 = 4;

/// Default retry interval cap when `enable_retries` gets zero
pub const DEFAULT_MAX_RETRY_INTERVAL: Duration = Duration::from_secs(30);

/// Transport settings for the underlying HTTP client
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Skip TLS certificate verification
    pub disable_ssl_verification: bool,
    /// Accept gzip-compressed responses
    pub enable_gzip: bool,
    /// User agent string
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            disable_ssl_verification: false,
            enable_gzip: false,
            user_agent: format!("schematics-rust-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ServiceConfig {
    /// Create a new config builder
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }
}

/// Builder for service config
#[derive(Debug, Default)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Skip TLS certificate verification
    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.config.disable_ssl_verification = disable;
        self
    }

    /// Accept gzip-compressed responses
    pub fn enable_gzip(mut self, enable: bool) -> Self {
        self.config.enable_gzip = enable;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ServiceConfig {
        self.config
    }
}

/// Retry policy applied when retries are enabled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt
    pub max_retries: u32,
    /// Upper bound on any single wait
    pub max_interval: Duration,
    /// Wait before the first retry; doubles per attempt
    pub initial_backoff: Duration,
}

impl RetryConfig {
    /// Policy for `enable_retries`; zero values select the defaults
    pub fn new(max_retries: u32, max_interval: Duration) -> Self {
        let max_retries = if max_retries == 0 {
            DEFAULT_MAX_RETRIES
        } else {
            max_retries
        };
        let max_interval = if max_interval.is_zero() {
            DEFAULT_MAX_RETRY_INTERVAL
        } else {
            max_interval
        };
        Self {
            max_retries,
            max_interval,
            initial_backoff: std::cmp::min(Duration::from_secs(1), max_interval),
        }
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        let delay = self.initial_backoff.saturating_mul(factor);
        std::cmp::min(delay, self.max_interval)
    }
}

/// Base service shared by every operation
#[derive(Clone)]
pub struct BaseService {
    client: Client,
    config: ServiceConfig,
    service_url: String,
    authenticator: Authenticator,
    default_headers: HeaderMap,
    retry: Option<RetryConfig>,
}

impl BaseService {
    /// Create a base service; fails on a malformed URL or invalid authenticator
    pub fn new(
        service_url: &str,
        authenticator: Authenticator,
        config: ServiceConfig,
    ) -> Result<Self> {
        authenticator.validate()?;
        validate_service_url(service_url)?;
        let client = build_client(&config)?;

        Ok(Self {
            client,
            config,
            service_url: service_url.to_string(),
            authenticator,
            default_headers: HeaderMap::new(),
            retry: None,
        })
    }

    /// Replace the service URL
    ///
    /// An empty URL is accepted here; requests then fail with
    /// [`Error::ServiceUrlMissing`] until a URL is set again.
    pub fn set_service_url(&mut self, url: &str) -> Result<()> {
        if !url.is_empty() {
            validate_service_url(url)?;
        }
        self.service_url = url.to_string();
        Ok(())
    }

    /// Current service URL
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Headers added to every request
    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.default_headers = headers;
    }

    /// Current default headers
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Toggle acceptance of gzip-compressed responses
    pub fn set_enable_gzip_compression(&mut self, enable: bool) -> Result<()> {
        self.config.enable_gzip = enable;
        self.client = build_client(&self.config)?;
        Ok(())
    }

    /// Whether gzip-compressed responses are accepted
    pub fn gzip_enabled(&self) -> bool {
        self.config.enable_gzip
    }

    /// Stop verifying TLS certificates
    pub fn disable_ssl_verification(&mut self) -> Result<()> {
        self.config.disable_ssl_verification = true;
        self.client = build_client(&self.config)?;
        Ok(())
    }

    /// Retry failed requests up to `max_retries` times, waiting at most
    /// `max_interval` between attempts. Zero values select the defaults.
    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        self.retry = Some(RetryConfig::new(max_retries, max_interval));
    }

    /// Turn automatic retries off
    pub fn disable_retries(&mut self) {
        self.retry = None;
    }

    /// Active retry policy, if any
    pub fn retry_config(&self) -> Option<&RetryConfig> {
        self.retry.as_ref()
    }

    /// The authenticator attached to every request
    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Send a request and decode the JSON body into `T`
    ///
    /// A successful response with an empty body is not decoded; its result
    /// is `T::default()`.
    pub async fn request<T: DeserializeOwned + Default>(
        &self,
        ctx: &Context,
        req: RequestConfig,
    ) -> Result<DetailedResponse<T>> {
        let raw = self.send(ctx, req, true).await?;
        if raw.body.trim().is_empty() {
            debug!("Empty response body with status {}", raw.status_code);
            return Ok(DetailedResponse {
                status_code: raw.status_code,
                headers: raw.headers,
                result: T::default(),
            });
        }
        match serde_json::from_str::<T>(&raw.body) {
            Ok(result) => Ok(DetailedResponse {
                status_code: raw.status_code,
                headers: raw.headers,
                result,
            }),
            Err(source) => Err(Error::Deserialize {
                source,
                response: Box::new(raw),
            }),
        }
    }

    /// Send a request whose response carries no body
    pub async fn request_no_content(
        &self,
        ctx: &Context,
        req: RequestConfig,
    ) -> Result<DetailedResponse<()>> {
        let raw = self.send(ctx, req, false).await?;
        Ok(DetailedResponse {
            status_code: raw.status_code,
            headers: raw.headers,
            result: (),
        })
    }

    async fn send(&self, ctx: &Context, req: RequestConfig, accept_json: bool) -> Result<RawResponse> {
        if self.service_url.is_empty() {
            return Err(Error::ServiceUrlMissing);
        }
        let url = req.build_url(&self.service_url)?;

        ctx.run(async {
            let response = self.execute(&req, &url, accept_json).await?;
            let status_code = response.status().as_u16();
            let headers = response.headers().clone();
            let body = response.text().await?;
            let raw = RawResponse {
                status_code,
                headers,
                body,
            };

            if !raw.is_success() {
                let message = error_message(&raw);
                debug!("{} {} failed with {}: {}", req.method, url, status_code, message);
                return Err(Error::Service {
                    status: status_code,
                    message,
                    response: Box::new(raw),
                });
            }

            debug!("Request succeeded: {} {}", req.method, url);
            Ok(raw)
        })
        .await
    }

    /// Run the request, retrying when the policy allows
    async fn execute(&self, req: &RequestConfig, url: &Url, accept_json: bool) -> Result<Response> {
        let max_retries = self.retry.as_ref().map_or(0, |r| r.max_retries);
        let mut attempt = 0;

        loop {
            let builder = self.build_request(req, url, accept_json)?;

            match builder.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    if attempt < max_retries && is_retryable_status(status) {
                        let delay = self.retry_delay(attempt, &response);
                        warn!(
                            "Request failed with {}, attempt {}/{}, retrying in {:?}",
                            status,
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(response);
                }
                Err(e) => {
                    if attempt < max_retries && (e.is_timeout() || e.is_connect()) {
                        let delay = self.retry_delay_for_attempt(attempt);
                        warn!(
                            "Request error ({}), attempt {}/{}, retrying in {:?}",
                            e,
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(Error::Http(e));
                }
            }
        }
    }

    fn build_request(
        &self,
        req: &RequestConfig,
        url: &Url,
        accept_json: bool,
    ) -> Result<RequestBuilder> {
        let mut builder = self
            .client
            .request(req.method.clone(), url.clone())
            .headers(self.default_headers.clone())
            .header(
                ANALYTICS_HEADER,
                format!(
                    "service_name=schematics;service_version=V1;operation_id={}",
                    req.operation_id
                ),
            );

        if accept_json {
            builder = builder.header(ACCEPT, "application/json");
        }

        for (key, value) in &req.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        builder = match &req.body {
            Some(RequestBody::Json(body)) => builder.json(body),
            Some(RequestBody::File(part)) => {
                let file = Part::bytes(part.content.to_vec())
                    .file_name(part.file_name.clone())
                    .mime_str(&part.content_type)?;
                builder.multipart(Form::new().part(part.field.clone(), file))
            }
            None => builder,
        };

        Ok(self.authenticator.apply(builder))
    }

    fn retry_delay(&self, attempt: u32, response: &Response) -> Duration {
        let Some(retry) = &self.retry else {
            return Duration::ZERO;
        };
        match extract_retry_after(response) {
            Some(after) => std::cmp::min(after, retry.max_interval),
            None => retry.calculate_backoff(attempt),
        }
    }

    fn retry_delay_for_attempt(&self, attempt: u32) -> Duration {
        self.retry
            .as_ref()
            .map_or(Duration::ZERO, |r| r.calculate_backoff(attempt))
    }
}

impl std::fmt::Debug for BaseService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseService")
            .field("service_url", &self.service_url)
            .field("config", &self.config)
            .field("auth_type", &self.authenticator.auth_type())
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

/// Check that a service URL parses as an absolute URL
pub(crate) fn validate_service_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(Error::ServiceUrlMissing);
    }
    Url::parse(url).map_err(|source| Error::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    Ok(())
}

fn build_client(config: &ServiceConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(&config.user_agent)
        .gzip(config.enable_gzip)
        .danger_accept_invalid_certs(config.disable_ssl_verification)
        .build()?;
    Ok(client)
}

/// Extract retry-after header value
fn extract_retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Best message for a failed response: structured payload first, then the status text
pub(crate) fn error_message(raw: &RawResponse) -> String {
    if let Ok(json) = serde_json::from_str::<JsonValue>(&raw.body) {
        if let Some(message) = json.pointer("/errors/0/message").and_then(JsonValue::as_str) {
            return message.to_string();
        }
        for key in ["error", "message", "errorMessage"] {
            if let Some(message) = json.get(key).and_then(JsonValue::as_str) {
                return message.to_string();
            }
        }
    }

    reqwest::StatusCode::from_u16(raw.status_code)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown error")
        .to_string()
}
