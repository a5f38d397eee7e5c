//! Authenticator implementation
//!
//! Validates credentials at construction time and applies them to requests.

use super::types::{AuthConfig, AuthType};
use crate::error::{Error, Result};
use reqwest::RequestBuilder;

/// Username that IBM Cloud expects alongside an API key in Basic auth
const APIKEY_USERNAME: &str = "apikey";

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    /// Auth configuration
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator, validating the given config
    pub fn new(config: AuthConfig) -> Result<Self> {
        let authenticator = Self { config };
        authenticator.validate()?;
        Ok(authenticator)
    }

    /// Authenticator that sends no credentials
    pub fn no_auth() -> Self {
        Self {
            config: AuthConfig::None,
        }
    }

    /// HTTP Basic authenticator
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        Self::new(AuthConfig::Basic {
            username: username.into(),
            password: password.into(),
        })
    }

    /// Static bearer token authenticator
    pub fn bearer_token(token: impl Into<String>) -> Result<Self> {
        Self::new(AuthConfig::BearerToken {
            token: token.into(),
        })
    }

    /// API key authenticator
    pub fn api_key(apikey: impl Into<String>) -> Result<Self> {
        Self::new(AuthConfig::ApiKey {
            apikey: apikey.into(),
        })
    }

    /// Check that every required credential is present and well formed
    pub fn validate(&self) -> Result<()> {
        match &self.config {
            AuthConfig::None => Ok(()),
            AuthConfig::Basic { username, password } => {
                check_property("username", username)?;
                check_property("password", password)
            }
            AuthConfig::BearerToken { token } => check_property("bearer token", token),
            AuthConfig::ApiKey { apikey } => check_property("apikey", apikey),
        }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.config {
            AuthConfig::None => req,
            AuthConfig::Basic { username, password } => req.basic_auth(username, Some(password)),
            AuthConfig::BearerToken { token } => req.bearer_auth(token),
            AuthConfig::ApiKey { apikey } => req.basic_auth(APIKEY_USERNAME, Some(apikey)),
        }
    }

    /// The scheme in use
    pub fn auth_type(&self) -> AuthType {
        self.config.auth_type()
    }

    /// Get the current auth config
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

/// Reject empty values and values still wrapped in template braces or quotes
fn check_property(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::auth(format!("the {name} property cannot be empty")));
    }
    if has_bad_first_or_last_char(value) {
        return Err(Error::auth(format!(
            "the {name} property must not start or end with '{{', '}}' or '\"'"
        )));
    }
    Ok(())
}

fn has_bad_first_or_last_char(value: &str) -> bool {
    const BAD: [char; 3] = ['{', '}', '"'];
    value.starts_with(&BAD[..]) || value.ends_with(&BAD[..])
}
