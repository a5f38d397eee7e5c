//! Pagination module
//!
//! Supports: Offset
//!
//! # Overview
//!
//! The list operations that page (`list_workspaces`,
//! `list_workspace_activities`, `list_actions`, `list_jobs`) get a `_pager`
//! companion returning a [`futures::Stream`] of items. The stream fetches
//! pages lazily with `offset`/`limit` query parameters and stops on an
//! empty page, a short page, or the reported total count.
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//!
//! let jobs: Vec<_> = client
//!     .list_jobs_pager(&ListJobsOptions::new().limit(50))
//!     .try_collect()
//!     .await?;
//! ```

mod pager;
mod strategies;
mod types;

pub use pager::{paginate, ItemStream};
pub use strategies::{OffsetPaginator, DEFAULT_PAGE_LIMIT};
pub use types::{NextPage, Page, PaginationState};
