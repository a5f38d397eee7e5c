//! Pagination types and traits
//!
//! Defines the page abstraction shared by every paging list operation.

use crate::models::{
    ActionList, ActionLite, JobList, JobLite, WorkspaceActivities, WorkspaceActivity,
    WorkspaceResponse, WorkspaceResponseList,
};

/// Result of the next page computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch the page starting at this offset
    Continue {
        /// Offset of the next page
        offset: i64,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// State tracked while walking pages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Offset of the next page to fetch
    pub offset: i64,
    /// Number of pages fetched
    pub pages: u32,
    /// Number of items seen so far
    pub total_fetched: u64,
    /// Whether pagination is complete
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at a specific offset
    pub fn with_offset(offset: i64) -> Self {
        Self {
            offset,
            ..Default::default()
        }
    }

    /// Record a fetched page
    pub fn add_fetched(&mut self, count: u64) {
        self.pages += 1;
        self.total_fetched += count;
    }

    /// Advance the offset
    pub fn add_offset(&mut self, count: i64) {
        self.offset += count;
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

/// A page returned by a list operation
pub trait Page {
    /// The element type of the page
    type Item;

    /// Total number of items across all pages, when the service reports it
    fn total_count(&self) -> Option<i64>;

    /// Consume the page, returning its items
    fn into_items(self) -> Vec<Self::Item>;
}

impl Page for WorkspaceResponseList {
    type Item = WorkspaceResponse;

    fn total_count(&self) -> Option<i64> {
        self.count
    }

    fn into_items(self) -> Vec<WorkspaceResponse> {
        self.workspaces.unwrap_or_default()
    }
}

impl Page for WorkspaceActivities {
    type Item = WorkspaceActivity;

    fn total_count(&self) -> Option<i64> {
        None
    }

    fn into_items(self) -> Vec<WorkspaceActivity> {
        self.actions.unwrap_or_default()
    }
}

impl Page for ActionList {
    type Item = ActionLite;

    fn total_count(&self) -> Option<i64> {
        self.total_count
    }

    fn into_items(self) -> Vec<ActionLite> {
        self.actions.unwrap_or_default()
    }
}

impl Page for JobList {
    type Item = JobLite;

    fn total_count(&self) -> Option<i64> {
        self.total_count
    }

    fn into_items(self) -> Vec<JobLite> {
        self.jobs.unwrap_or_default()
    }
}
