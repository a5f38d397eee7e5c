//! Workspace models

use super::DateTime;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

/// Reference to a catalog offering a workspace was created from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRef {
    /// Dry run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,

    /// Catalog item icon URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_icon_url: Option<String>,

    /// Catalog item ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,

    /// Catalog item name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,

    /// Catalog item readme URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_readme_url: Option<String>,

    /// Catalog item URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_url: Option<String>,

    /// Catalog item launch URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_url: Option<String>,

    /// Catalog offering version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_version: Option<String>,
}

/// Target cluster data shared across the templates of a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedTargetData {
    /// Cluster creation date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_created_on: Option<String>,

    /// Cluster ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,

    /// Cluster name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,

    /// Cluster type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,

    /// Entitlement keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitlement_keys: Option<Vec<JsonValue>>,

    /// Target namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Target region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Target resource group ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,

    /// Cluster worker count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_count: Option<i64>,

    /// Cluster worker type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_machine_type: Option<String>,
}

/// Shared target data as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedTargetDataResponse {
    /// Target cluster ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,

    /// Target cluster name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,

    /// Entitlement keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitlement_keys: Option<Vec<JsonValue>>,

    /// Target namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Target region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Target resource group ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
}

/// Input variable as sent to the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceVariableRequest {
    /// Variable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Variable name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the value is masked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,

    /// Terraform type of the variable
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Use the template default instead of `value`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_default: Option<bool>,

    /// Variable value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl WorkspaceVariableRequest {
    /// A named variable with a value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

/// Input variable as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceVariableResponse {
    /// Variable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Variable name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the value is masked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,

    /// Terraform type of the variable
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Variable value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Environment variable of a template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvVariableResponse {
    /// Hidden from the UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    /// Variable name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the value is masked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,

    /// Variable value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Template definition sent when creating or replacing a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateSourceDataRequest {
    /// Environment values, free-form objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_values: Option<Vec<JsonValue>>,

    /// Repository folder holding the template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    /// Compact the template when downloading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact: Option<bool>,

    /// Initial terraform state file content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_state_file: Option<String>,

    /// Template type, e.g. `terraform_v0.12`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Script run on uninstall
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uninstall_script_name: Option<String>,

    /// Raw tfvars content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<String>,

    /// Metadata describing the variables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values_metadata: Option<Vec<JsonValue>>,

    /// Input variables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variablestore: Option<Vec<WorkspaceVariableRequest>>,
}

/// Template definition as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateSourceDataResponse {
    /// Environment variables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_values: Option<Vec<EnvVariableResponse>>,

    /// Repository folder holding the template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    /// Compact the template when downloading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact: Option<bool>,

    /// A GitHub token is stored for this template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_githubtoken: Option<bool>,

    /// Template ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Template type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Script run on uninstall
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uninstall_script_name: Option<String>,

    /// Raw tfvars content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<String>,

    /// Metadata describing the variables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values_metadata: Option<Vec<JsonValue>>,

    /// URL of the values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values_url: Option<String>,

    /// Input variables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variablestore: Option<Vec<WorkspaceVariableResponse>>,
}

/// Template repository sent when creating a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateRepoRequest {
    /// Repository branch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Repository release
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,

    /// Repository commit SHA
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_sha_value: Option<String>,

    /// Repository URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    /// Source URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Template repository sent when replacing or updating a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateRepoUpdateRequest {
    /// Repository branch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Repository release
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,

    /// Repository commit SHA
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_sha_value: Option<String>,

    /// Repository URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    /// Source URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Template repository as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateRepoResponse {
    /// Repository branch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Full repository URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    /// A tar file was uploaded instead of a git repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_uploadedgitrepotar: Option<bool>,

    /// Repository release
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,

    /// Repository commit SHA
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_sha_value: Option<String>,

    /// Repository URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    /// Source URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Runtime data of one template: engine and state/log locations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateRunTimeDataResponse {
    /// Engine command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_cmd: Option<String>,

    /// Engine name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_name: Option<String>,

    /// Engine version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    /// Template ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Log store URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_store_url: Option<String>,

    /// Output values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_values: Option<Vec<JsonValue>>,

    /// Resources, grouped per module
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Vec<JsonValue>>>,

    /// State store URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_store_url: Option<String>,
}

/// Freeze and lock flags sent when creating a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceStatusRequest {
    /// Frozen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen: Option<bool>,

    /// Frozen at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen_at: Option<DateTime>,

    /// Frozen by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen_by: Option<String>,

    /// Locked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,

    /// Locked by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_by: Option<String>,

    /// Locked at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_time: Option<DateTime>,
}

/// Freeze and lock flags sent when replacing or updating a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceStatusUpdateRequest {
    /// Frozen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen: Option<bool>,

    /// Frozen at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen_at: Option<DateTime>,

    /// Frozen by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen_by: Option<String>,

    /// Locked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,

    /// Locked by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_by: Option<String>,

    /// Locked at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_time: Option<DateTime>,
}

/// Freeze and lock flags as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceStatusResponse {
    /// Frozen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen: Option<bool>,

    /// Frozen at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen_at: Option<DateTime>,

    /// Frozen by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen_by: Option<String>,

    /// Locked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,

    /// Locked by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_by: Option<String>,

    /// Locked at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_time: Option<DateTime>,
}

/// Status code and message of a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceStatusMessage {
    /// Status code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,

    /// Status message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_msg: Option<String>,
}

/// A workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceResponse {
    /// Shared dataset IDs applied to the workspace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_shareddata_ids: Option<Vec<String>>,

    /// Catalog reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_ref: Option<CatalogRef>,

    /// Creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,

    /// Creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Workspace CRN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Workspace ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Last health check time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_health_check_at: Option<DateTime>,

    /// Location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Resource group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,

    /// Runtime data per template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_data: Option<Vec<TemplateRunTimeDataResponse>>,

    /// Shared target data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_data: Option<SharedTargetDataResponse>,

    /// Workspace status, e.g. `ACTIVE`, `INACTIVE`, `FAILED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Templates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_data: Option<Vec<TemplateSourceDataResponse>>,

    /// Template reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_ref: Option<String>,

    /// Template repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_repo: Option<TemplateRepoResponse>,

    /// Template types
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<Vec<String>>,

    /// Last update time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,

    /// Last updater
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    /// Freeze and lock flags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_status: Option<WorkspaceStatusResponse>,

    /// Status message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_status_msg: Option<WorkspaceStatusMessage>,
}

/// One page of workspaces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceResponseList {
    /// Total number of workspaces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Page offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    /// Workspaces in this page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspaces: Option<Vec<WorkspaceResponse>>,
}

/// Result of uploading a template tar file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateRepoTarUploadResponse {
    /// Tar file value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_value: Option<String>,

    /// The file was received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_received_file: Option<bool>,

    /// Workspace or action ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Template readme
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateReadme {
    /// Readme content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
}
