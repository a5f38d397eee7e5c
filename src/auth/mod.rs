//! Authentication module
//!
//! Supports: No auth, Basic, Bearer token, IBM Cloud API key
//!
//! The `Authenticator` is validated when it is built, so a client can never
//! hold credentials that are empty or still carry template placeholders.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, AuthType};
