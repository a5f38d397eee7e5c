//! The Schematics V1 client
//!
//! [`SchematicsV1`] wraps a [`BaseService`] and exposes one method per REST
//! operation. Each operation takes an options value and comes in two forms:
//! `op(&options)` runs under [`Context::background`](crate::http::Context::background), and
//! `op_with_context(&ctx, &options)` runs under a caller-supplied deadline or
//! cancellation scope.
//!
//! ```rust,ignore
//! use schematics_sdk::{Authenticator, SchematicsV1, SchematicsV1Options};
//! use schematics_sdk::service::GetWorkspaceOptions;
//!
//! let client = SchematicsV1::new(SchematicsV1Options {
//!     authenticator: Some(Authenticator::api_key("my-key")?),
//!     ..Default::default()
//! })?;
//! let workspace = client.get_workspace(&GetWorkspaceOptions::new("my-ws-id")).await?;
//! println!("{:?}", workspace.result().name);
//! ```

mod actions;
mod activities;
mod bulk;
mod datasets;
mod jobs;
mod kms;
mod templates;
mod utilities;
mod workspaces;

pub use actions::*;
pub use activities::*;
pub use bulk::*;
pub use datasets::*;
pub use jobs::*;
pub use kms::*;
pub use templates::*;
pub use utilities::*;
pub use workspaces::*;

use crate::auth::Authenticator;
use crate::config::ExternalConfig;
use crate::error::{Error, Result};
use crate::http::{BaseService, RetryConfig, ServiceConfig};
use reqwest::header::HeaderMap;
use std::time::Duration;
use tracing::info;

/// Default endpoint of the service
pub const DEFAULT_SERVICE_URL: &str = "https://schematics.cloud.ibm.com";

/// Default name used to look up external configuration
pub const DEFAULT_SERVICE_NAME: &str = "schematics";

/// Options for constructing a [`SchematicsV1`]
#[derive(Debug, Clone, Default)]
pub struct SchematicsV1Options {
    /// Prefix for external configuration lookup; defaults to `schematics`
    pub service_name: Option<String>,
    /// Service endpoint; defaults to [`DEFAULT_SERVICE_URL`]
    pub url: Option<String>,
    /// Credentials sent with every request
    pub authenticator: Option<Authenticator>,
}

/// Client for the Schematics V1 API
#[derive(Debug, Clone)]
pub struct SchematicsV1 {
    service: BaseService,
}

impl SchematicsV1 {
    /// Create a client from explicit options
    ///
    /// Fails when no authenticator is given, the authenticator is invalid,
    /// or the URL does not parse.
    pub fn new(options: SchematicsV1Options) -> Result<Self> {
        let authenticator = options
            .authenticator
            .ok_or_else(|| Error::auth("an authenticator is required"))?;
        let url = options.url.as_deref().unwrap_or(DEFAULT_SERVICE_URL);

        let service = BaseService::new(url, authenticator, ServiceConfig::default())?;
        info!(
            "Schematics client created for {} ({})",
            url,
            service.authenticator().auth_type()
        );
        Ok(Self { service })
    }

    /// Create a client from `<SERVICE>_*` environment variables
    ///
    /// The environment is read once, here. Fields set in `options` take
    /// precedence over the environment.
    pub fn new_using_external_config(options: SchematicsV1Options) -> Result<Self> {
        let service_name = options
            .service_name
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
        let config = ExternalConfig::from_env(&service_name)?;
        Self::with_external_config(options, &config)
    }

    /// Create a client from already-captured external configuration
    pub fn from_external_config(config: &ExternalConfig) -> Result<Self> {
        Self::with_external_config(SchematicsV1Options::default(), config)
    }

    fn with_external_config(options: SchematicsV1Options, config: &ExternalConfig) -> Result<Self> {
        let authenticator = match options.authenticator {
            Some(authenticator) => authenticator,
            None => config.authenticator()?,
        };
        let url = options
            .url
            .or_else(|| config.url.clone())
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

        let service_config = ServiceConfig::builder()
            .disable_ssl_verification(config.disable_ssl)
            .enable_gzip(config.enable_gzip)
            .build();
        let mut service = BaseService::new(&url, authenticator, service_config)?;
        if let Some((max_retries, max_interval)) = config.retries() {
            service.enable_retries(max_retries, max_interval);
        }

        info!(
            "Schematics client created from external config for {} ({})",
            url,
            service.authenticator().auth_type()
        );
        Ok(Self { service })
    }

    /// Service endpoint for an IBM Cloud region
    pub fn service_url_for_region(region: &str) -> Result<&'static str> {
        match region {
            "us-south" | "us-east" => Ok("https://us.schematics.cloud.ibm.com"),
            "eu-gb" | "eu-de" => Ok("https://eu.schematics.cloud.ibm.com"),
            other => Err(Error::config(format!("service URL for region '{other}' not found"))),
        }
    }

    /// Replace the service URL
    ///
    /// An empty URL is accepted; operations then fail until a URL is set.
    pub fn set_service_url(&mut self, url: &str) -> Result<()> {
        self.service.set_service_url(url)
    }

    /// Current service URL
    pub fn service_url(&self) -> &str {
        self.service.service_url()
    }

    /// Headers added to every request
    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.service.set_default_headers(headers);
    }

    /// Toggle acceptance of gzip-compressed responses
    pub fn set_enable_gzip_compression(&mut self, enable: bool) -> Result<()> {
        self.service.set_enable_gzip_compression(enable)
    }

    /// Whether gzip-compressed responses are accepted
    pub fn enable_gzip_compression(&self) -> bool {
        self.service.gzip_enabled()
    }

    /// Stop verifying TLS certificates
    pub fn disable_ssl_verification(&mut self) -> Result<()> {
        self.service.disable_ssl_verification()
    }

    /// Retry failed requests; zero values select the defaults
    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        self.service.enable_retries(max_retries, max_interval);
    }

    /// Turn automatic retries off
    pub fn disable_retries(&mut self) {
        self.service.disable_retries();
    }

    /// Active retry policy, if any
    pub fn retry_config(&self) -> Option<&RetryConfig> {
        self.service.retry_config()
    }

    /// The underlying base service
    pub fn base_service(&self) -> &BaseService {
        &self.service
    }
}

/// Reject an empty required value before any I/O
fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::missing_field(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
