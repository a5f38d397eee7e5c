//! Workspace bulk-deletion job models

use super::DateTime;
use serde::{Deserialize, Serialize};

/// Job accepted for a bulk workspace deletion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceBulkDeleteResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

/// Per-workspace outcome of a bulk deletion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceJobStatusType {
    /// Workspaces that failed to delete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<Vec<String>>,

    /// Workspaces still queued
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_progress: Option<Vec<String>>,

    /// Workspaces deleted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_on: Option<DateTime>,
}

/// Status of a bulk deletion job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<WorkspaceJobStatusType>,
}
