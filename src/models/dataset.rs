//! Shared dataset models

use super::DateTime;
use serde::{Deserialize, Serialize};

/// Values stored in a shared dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedDatasetData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub immutable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value_len: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value_len: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub var_aliases: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub var_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub var_ref: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub var_type: Option<String>,
}

/// A shared dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedDatasetResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Workspaces consuming this dataset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effected_workspaces: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_dataset_data: Option<Vec<SharedDatasetData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_dataset_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_dataset_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_dataset_source_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_dataset_type: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// All shared datasets of the account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedDatasetResponseList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_datasets: Option<Vec<SharedDatasetResponse>>,
}
