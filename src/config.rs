//! External service configuration
//!
//! Settings that callers usually supply outside of code: the service URL,
//! credentials and transport toggles. They can be captured from
//! `<SERVICE>_*` environment variables, any key/value source, or a YAML
//! document. Capturing happens once; the resulting [`ExternalConfig`] is a
//! plain value passed to the client constructor.

use crate::auth::{AuthType, Authenticator};
use crate::error::{Error, Result};
use crate::types::{parse_bool_flag, OptionStringExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Service configuration captured from outside the program
///
/// ```yaml
/// url: https://us.schematics.cloud.ibm.com
/// auth_type: apikey
/// apikey: my-api-key
/// enable_retries: true
/// max_retries: 3
/// retry_interval: 20
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalConfig {
    /// Service endpoint URL
    pub url: Option<String>,

    /// Authentication type (`noauth`, `basic`, `bearertoken`, `apikey`)
    pub auth_type: Option<String>,

    /// API key for `apikey` auth
    pub apikey: Option<String>,

    /// Username for `basic` auth
    pub username: Option<String>,

    /// Password for `basic` auth
    pub password: Option<String>,

    /// Token for `bearertoken` auth
    pub bearer_token: Option<String>,

    /// Skip TLS certificate verification
    pub disable_ssl: bool,

    /// Accept gzip-compressed responses
    pub enable_gzip: bool,

    /// Turn automatic retries on
    pub enable_retries: bool,

    /// Maximum retries when retries are enabled
    pub max_retries: Option<u32>,

    /// Maximum retry interval in seconds
    pub retry_interval: Option<u64>,
}

impl ExternalConfig {
    /// Capture `<SERVICE>_*` variables from the process environment
    pub fn from_env(service_name: &str) -> Result<Self> {
        Self::from_vars(service_name, std::env::vars())
    }

    /// Capture `<SERVICE>_*` entries from any key/value source
    ///
    /// The service name is upper-cased and `-` becomes `_`, so `schematics`
    /// reads `SCHEMATICS_URL`, `SCHEMATICS_AUTH_TYPE` and so on. Unrelated
    /// keys are ignored.
    pub fn from_vars<I, K, V>(service_name: &str, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let prefix = format!("{}_", service_name.to_ascii_uppercase().replace('-', "_"));
        let mut config = Self::default();

        for (key, value) in vars {
            let Some(property) = key.as_ref().strip_prefix(&prefix) else {
                continue;
            };
            let value: String = value.into();
            let field = key.as_ref();

            match property {
                "URL" => config.url = value.none_if_empty(),
                "AUTH_TYPE" => config.auth_type = value.none_if_empty(),
                "APIKEY" => config.apikey = value.none_if_empty(),
                "USERNAME" => config.username = value.none_if_empty(),
                "PASSWORD" => config.password = value.none_if_empty(),
                "BEARER_TOKEN" => config.bearer_token = value.none_if_empty(),
                "DISABLE_SSL" => config.disable_ssl = parse_flag(field, &value)?,
                "ENABLE_GZIP" => config.enable_gzip = parse_flag(field, &value)?,
                "ENABLE_RETRIES" => config.enable_retries = parse_flag(field, &value)?,
                "MAX_RETRIES" => config.max_retries = Some(parse_number(field, &value)?),
                "RETRY_INTERVAL" => config.retry_interval = Some(parse_number(field, &value)?),
                _ => {}
            }
        }

        Ok(config)
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// The configured auth type, defaulting to `apikey`
    pub fn resolved_auth_type(&self) -> Result<AuthType> {
        match self.auth_type.as_deref() {
            Some(auth_type) => auth_type.parse(),
            None => Ok(AuthType::ApiKey),
        }
    }

    /// Build the authenticator these settings describe
    pub fn authenticator(&self) -> Result<Authenticator> {
        let owned = |value: &Option<String>| value.clone().unwrap_or_default();

        match self.resolved_auth_type()? {
            AuthType::NoAuth => Ok(Authenticator::no_auth()),
            AuthType::Basic => Authenticator::basic(owned(&self.username), owned(&self.password)),
            AuthType::BearerToken => Authenticator::bearer_token(owned(&self.bearer_token)),
            AuthType::ApiKey => Authenticator::api_key(owned(&self.apikey)),
        }
    }

    /// Retry policy as `(max_retries, max_interval)` when retries are on
    pub fn retries(&self) -> Option<(u32, Duration)> {
        self.enable_retries.then(|| {
            (
                self.max_retries.unwrap_or(0),
                Duration::from_secs(self.retry_interval.unwrap_or(0)),
            )
        })
    }
}

fn parse_flag(field: &str, value: &str) -> Result<bool> {
    parse_bool_flag(value)
        .ok_or_else(|| Error::invalid_value(field, format!("expected true or false, got '{value}'")))
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::invalid_value(field, format!("expected a number, got '{value}'")))
}
