//! Request and response models
//!
//! Plain serde DTOs mirroring the service's JSON schema. Every field is
//! optional and omitted from request bodies when unset; unknown fields in
//! responses are ignored.

mod action;
mod activity;
mod bulk;
mod dataset;
mod job;
mod kms;
mod template;
mod utilities;
mod workspace;

pub use action::*;
pub use activity::*;
pub use bulk::*;
pub use dataset::*;
pub use job::*;
pub use kms::*;
pub use template::*;
pub use utilities::*;
pub use workspace::*;

/// Timestamp type used by every model
pub type DateTime = chrono::DateTime<chrono::Utc>;
