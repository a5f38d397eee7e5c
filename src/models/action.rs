//! Action models
//!
//! An action is an Ansible playbook definition that jobs execute against a
//! set of target resources.

use super::DateTime;
use serde::{Deserialize, Serialize};

/// User-controlled state of an action or workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    /// `draft`, `live`, `locked`, `disabled` or `normal`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_at: Option<DateTime>,
}

/// Lock held on an action while a job runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemLock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys_locked: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys_locked_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys_locked_at: Option<DateTime>,
}

/// Target resources of an action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetResourceset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Terraform resource query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_query: Option<String>,

    /// Credential reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_ref: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys_lock: Option<SystemLock>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_ids: Option<Vec<String>>,
}

/// Git repository holding an action's playbooks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalSourceGit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_repo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_repo_folder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_release: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
}

/// Source of an action's automation code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalSource {
    /// `local`, `git_hub`, `git_hub_enterprise`, `git_lab`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub git: Option<ExternalSourceGit>,
}

impl ExternalSource {
    /// A source of the given type
    pub fn new(source_type: impl Into<String>) -> Self {
        Self {
            source_type: Some(source_type.into()),
            git: None,
        }
    }
}

/// Metadata describing one variable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableMetadata {
    /// `boolean`, `string`, `integer`, `date`, `array`, `list`, `map` or `complex`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub immutable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A named variable with its value and metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<VariableMetadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl VariableData {
    /// A variable with a value and no metadata
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

/// Computed state of an action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionState {
    /// `normal`, `pending`, `disabled` or `critical`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_job_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

/// Computed state in an action summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionLiteState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

/// Complete action definition
///
/// Used both as the body of create/update requests and as the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Location where the action runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_state: Option<UserState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_readme_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ExternalSource>,

    /// `local`, `git_hub`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    /// Playbook to execute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_parameter: Option<String>,

    /// Bastion host resource set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bastion: Option<TargetResourceset>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets_ini: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Vec<VariableData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<VariableData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<VariableData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<VariableData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_record_id: Option<String>,

    // Server-populated fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_created_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_created_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_updated_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_updated_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ActionState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub playbook_names: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys_lock: Option<SystemLock>,
}

/// Summary of an action as returned by the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionLite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub playbook_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_state: Option<UserState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ActionLiteState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys_lock: Option<SystemLock>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

/// One page of actions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionList {
    /// Total number of actions across all pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ActionLite>>,
}
