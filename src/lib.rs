// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Schematics SDK
//!
//! A typed async client for the IBM Cloud Schematics V1 REST API:
//! workspaces, workspace activities, templates, actions, jobs, bulk
//! deletion, shared datasets, KMS settings and service utilities.
//!
//! ## Features
//!
//! - **One method per operation**: `op(&options)` plus `op_with_context(&ctx, &options)`
//! - **Multiple Auth Types**: No auth, Basic, Bearer token, API key
//! - **External Configuration**: `SCHEMATICS_*` environment variables or YAML
//! - **Opt-in Retries**: exponential backoff with `Retry-After` support
//! - **Deadlines and Cancellation**: per-call [`Context`]
//! - **Pagination**: item streams over the paging list operations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use schematics_sdk::service::{CreateWorkspaceOptions, ListWorkspacesOptions};
//! use schematics_sdk::{Authenticator, Result, SchematicsV1, SchematicsV1Options};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = SchematicsV1::new(SchematicsV1Options {
//!         url: Some(SchematicsV1::service_url_for_region("us-south")?.to_string()),
//!         authenticator: Some(Authenticator::api_key("my-api-key")?),
//!         ..Default::default()
//!     })?;
//!
//!     let created = client
//!         .create_workspace(&CreateWorkspaceOptions::new().name("my-workspace"))
//!         .await?;
//!     println!("created {:?}", created.result().id);
//!
//!     let page = client
//!         .list_workspaces(&ListWorkspacesOptions::new().limit(10))
//!         .await?;
//!     println!("{} workspaces", page.result().count.unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         SchematicsV1                            │
//! │  op(&options) → op_with_context(&ctx, &options) → Result<T>     │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │   Auth   │   HTTP    │   Paginate    │  Config   │   Models    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ No auth  │ JSON      │ Offset        │ Env vars  │ Workspaces  │
//! │ Basic    │ Multipart │ Item streams  │ YAML      │ Actions     │
//! │ Bearer   │ Retry     │               │           │ Jobs        │
//! │ API Key  │ Context   │               │           │ KMS, ...    │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: document the options setters before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP transport with retries and deadlines
pub mod http;

/// External configuration
pub mod config;

/// Request and response models
pub mod models;

/// The Schematics V1 client and its operations
pub mod service;

/// Offset pagination over list operations
pub mod pagination;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use auth::{AuthConfig, AuthType, Authenticator};
pub use config::ExternalConfig;
pub use http::{CancelHandle, Context, DetailedResponse, RawResponse};
pub use service::{SchematicsV1, SchematicsV1Options};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
