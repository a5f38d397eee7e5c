//! HTTP transport module
//!
//! The base service every operation goes through. It owns the service URL,
//! the authenticator, default headers and the retry policy, and turns a
//! [`RequestConfig`] into a [`DetailedResponse`] or a structured error.
//!
//! # Features
//!
//! - **Opt-in Retries**: exponential backoff capped by a max interval, honouring `Retry-After`
//! - **Deadlines and Cancellation**: per-call [`Context`]
//! - **Diagnostics**: failed responses stay available through [`crate::Error::response`]

mod client;
mod context;
mod request;
mod response;

pub use client::{
    BaseService, RetryConfig, ServiceConfig, ServiceConfigBuilder, DEFAULT_MAX_RETRIES,
    DEFAULT_MAX_RETRY_INTERVAL,
};
pub use context::{CancelHandle, Context};
pub use request::{FilePart, RequestBody, RequestConfig};
pub use response::{DetailedResponse, RawResponse};

#[cfg(test)]
mod tests;
