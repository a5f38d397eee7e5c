//! Workspace activity models: terraform command runs and their summaries

use super::DateTime;
use serde::{Deserialize, Serialize};

/// Summary of a template's log for one activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_template_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discarded_files: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources_added: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources_destroyed: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources_modified: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanned_files: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_variable_count: Option<i64>,

    /// Seconds spent on the activity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_taken: Option<f64>,
}

/// Per-template outcome of an activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceActivityTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_summary: Option<LogSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_type: Option<String>,
}

/// One activity (plan, apply, destroy, refresh, commands) on a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceActivity {
    /// Activity ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,

    /// Messages emitted by the activity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Vec<String>>,

    /// Activity name, e.g. `APPLY`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub performed_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub performed_by: Option<String>,

    /// `PENDING`, `INPROGRESS`, `COMPLETED`, `FAILED` or `CANCELLED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<WorkspaceActivityTemplate>>,
}

/// One page of activities for a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceActivities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<WorkspaceActivity>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_name: Option<String>,
}

/// Activity ID returned when a command is queued
///
/// Shared by apply, destroy, plan, refresh, run-commands and
/// delete-activity responses, which all carry the same single field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceActivityCommandResult {
    /// Activity ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activityid: Option<String>,
}

/// Terraform targeting options for apply and destroy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceActivityOptionsTemplate {
    /// Resource addresses passed as `-target`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<String>>,

    /// Variables passed as `-var`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tf_vars: Option<Vec<String>>,
}

/// A terraform command to run against a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerraformCommand {
    /// Command, e.g. `state show`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Command arguments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_params: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_desc: Option<String>,

    /// `continue` or `abort`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_on_error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_depends_on: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_status: Option<String>,
}

impl TerraformCommand {
    /// A command with its arguments
    pub fn new(command: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            command_params: Some(params.into()),
            ..Default::default()
        }
    }
}

/// Log URL of one template within an activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceActivityLogsTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_type: Option<String>,
}

/// Log URLs of an activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceActivityLogs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<WorkspaceActivityLogsTemplate>>,
}
