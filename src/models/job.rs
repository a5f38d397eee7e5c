//! Job models
//!
//! A job is one execution of an action or of a workspace command. Jobs
//! carry a status block per kind of target and a log summary once they
//! have run.

use super::action::{TargetResourceset, VariableData};
use super::DateTime;
use serde::{Deserialize, Serialize};

/// Status of an action job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStatusAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,

    /// `job_pending`, `job_in_progress`, `job_finished`, `job_failed`,
    /// `job_cancelled`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bastion_status_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bastion_status_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets_status_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets_status_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

/// Status of a job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_job_status: Option<JobStatusAction>,
}

/// Data of an action job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDataAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<VariableData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<VariableData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<VariableData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

/// Data of a job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobData {
    /// Only `action` is currently defined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_job_data: Option<JobDataAction>,
}

/// An error or warning counted in a job log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobLogSummaryLogErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_count: Option<f64>,
}

/// Log summary of a repository download job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobLogSummaryRepoDownloadJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanned_file_count: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarantined_file_count: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_filetype: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs_count: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs_count: Option<String>,
}

/// Per-host counters of an Ansible run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobLogSummaryActionJobRecap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unreachable: Option<f64>,
}

/// Log summary of an action job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobLogSummaryActionJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_count: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_count: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_count: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recap: Option<JobLogSummaryActionJobRecap>,
}

/// Summary of a job's log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobLogSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    /// `repo_download_job` or `action_job`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_start_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_analyzed_till: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_errors: Option<Vec<JobLogSummaryLogErrors>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_download_job: Option<JobLogSummaryRepoDownloadJob>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_job: Option<JobLogSummaryActionJob>,
}

/// Complete job record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// `workspace` or `action`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_object: Option<String>,

    /// ID of the workspace or action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_object_id: Option<String>,

    /// Playbook or workspace command name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_parameter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_options: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<VariableData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<VariableData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JobData>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets_ini: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bastion: Option<TargetResourceset>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_summary: Option<JobLogSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_store_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_store_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

/// Summary of a job as returned by the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobLite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_object: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_object_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_summary: Option<JobLogSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

/// One page of jobs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<JobLite>>,
}

/// Log output of a job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_summary: Option<JobLogSummary>,

    /// Format of `details`, e.g. `json`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Log content, base64 encoded by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

/// One entry of a job's state summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStateDataSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// State recorded by a job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<JobStateDataSummary>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}
