//! Auth configuration types

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Authentication scheme selector, as spelled in `<SERVICE>_AUTH_TYPE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthType {
    /// No credentials are attached
    NoAuth,
    /// HTTP Basic with username and password
    Basic,
    /// A caller-supplied bearer token
    BearerToken,
    /// An IBM Cloud API key, sent as Basic `apikey:<key>`
    ApiKey,
}

impl AuthType {
    /// Canonical lower-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::NoAuth => "noauth",
            AuthType::Basic => "basic",
            AuthType::BearerToken => "bearertoken",
            AuthType::ApiKey => "apikey",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "noauth" => Ok(AuthType::NoAuth),
            "basic" => Ok(AuthType::Basic),
            "bearertoken" => Ok(AuthType::BearerToken),
            "apikey" => Ok(AuthType::ApiKey),
            _ => Err(Error::UnsupportedAuthType {
                auth_type: s.to_string(),
            }),
        }
    }
}

/// Authentication configuration
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Bearer token authentication
    BearerToken {
        /// The bearer token
        token: String,
    },

    /// IBM Cloud API key
    ApiKey {
        /// The API key value
        apikey: String,
    },
}

impl AuthConfig {
    /// The scheme this configuration uses
    pub fn auth_type(&self) -> AuthType {
        match self {
            AuthConfig::None => AuthType::NoAuth,
            AuthConfig::Basic { .. } => AuthType::Basic,
            AuthConfig::BearerToken { .. } => AuthType::BearerToken,
            AuthConfig::ApiKey { .. } => AuthType::ApiKey,
        }
    }
}

// Secrets never reach logs through Debug.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthConfig::None => f.write_str("None"),
            AuthConfig::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            AuthConfig::BearerToken { .. } => {
                f.debug_struct("BearerToken").field("token", &"***").finish()
            }
            AuthConfig::ApiKey { .. } => f.debug_struct("ApiKey").field("apikey", &"***").finish(),
        }
    }
}
