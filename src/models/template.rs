//! Template data models: inputs, outputs, resources, state and log stores

use super::workspace::{
    SharedTargetData, TemplateRunTimeDataResponse, TemplateSourceDataResponse,
    WorkspaceVariableResponse,
};
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

/// Variable metadata of one template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values_metadata: Option<Vec<JsonValue>>,
}

/// Input values of one template after replacement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserValues {
    /// Environment values, free-form objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_values: Option<Vec<JsonValue>>,

    /// Raw tfvars content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<String>,

    /// Input variables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variablestore: Option<Vec<WorkspaceVariableResponse>>,
}

/// Input values of every template in a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceTemplateValuesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_data: Option<Vec<TemplateRunTimeDataResponse>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_data: Option<SharedTargetData>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_data: Option<Vec<TemplateSourceDataResponse>>,
}

/// Terraform outputs of one template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputValuesInner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    /// Template ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_values: Option<Vec<JsonValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}

/// Resources provisioned by one template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    /// Template ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub null_resources: Option<Vec<JsonValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_resources: Option<Vec<JsonValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<JsonValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_type: Option<String>,
}

/// Where the terraform state of one template lives
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateStoreResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_store_url: Option<String>,
}

/// State store locations for every template of a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateStoreResponseList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_data: Option<Vec<StateStoreResponse>>,
}

/// Terraform state file of one template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateStateStore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineage: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<JsonValue>>,
}

/// Where the logs of one template live
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogStoreResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_store_url: Option<String>,
}

/// Log store locations for every template of a workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogStoreResponseList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_data: Option<Vec<LogStoreResponse>>,
}
