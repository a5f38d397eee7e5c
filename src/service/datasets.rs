//! Shared dataset operations

use super::{require, SchematicsV1};
use crate::error::Result;
use crate::http::{Context, DetailedResponse, RequestConfig};
use crate::models::{SharedDatasetData, SharedDatasetResponse, SharedDatasetResponseList};
use reqwest::Method;
use serde::Serialize;

/// Body of create and replace requests
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SharedDataset {
    /// Push changes to the workspaces that use the dataset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_propagate_change: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effected_workspace_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_dataset_data: Option<Vec<SharedDatasetData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_dataset_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_dataset_source_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_dataset_type: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Options for [`SchematicsV1::list_shared_datasets`]
#[derive(Debug, Clone, Default)]
pub struct ListSharedDatasetsOptions;

impl ListSharedDatasetsOptions {
    pub fn new() -> Self {
        Self
    }
}

/// Options for [`SchematicsV1::create_shared_dataset`]
#[derive(Debug, Clone, Default)]
pub struct CreateSharedDatasetOptions {
    pub dataset: SharedDataset,
}

impl CreateSharedDatasetOptions {
    pub fn new(dataset: SharedDataset) -> Self {
        Self { dataset }
    }
}

/// Options naming one shared dataset
#[derive(Debug, Clone, Default)]
pub struct SharedDatasetIdOptions {
    /// Shared dataset ID
    pub sd_id: String,
}

impl SharedDatasetIdOptions {
    pub fn new(sd_id: impl Into<String>) -> Self {
        Self {
            sd_id: sd_id.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("sd_id", &self.sd_id)
    }
}

pub type GetSharedDatasetOptions = SharedDatasetIdOptions;
pub type DeleteSharedDatasetOptions = SharedDatasetIdOptions;

/// Options for [`SchematicsV1::replace_shared_dataset`]
#[derive(Debug, Clone, Default)]
pub struct ReplaceSharedDatasetOptions {
    /// Shared dataset ID
    pub sd_id: String,
    pub dataset: SharedDataset,
}

impl ReplaceSharedDatasetOptions {
    pub fn new(sd_id: impl Into<String>, dataset: SharedDataset) -> Self {
        Self {
            sd_id: sd_id.into(),
            dataset,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("sd_id", &self.sd_id)
    }
}

impl SchematicsV1 {
    /// List the account's shared datasets
    pub async fn list_shared_datasets(
        &self,
        options: &ListSharedDatasetsOptions,
    ) -> Result<DetailedResponse<SharedDatasetResponseList>> {
        self.list_shared_datasets_with_context(&Context::background(), options)
            .await
    }

    pub async fn list_shared_datasets_with_context(
        &self,
        ctx: &Context,
        _options: &ListSharedDatasetsOptions,
    ) -> Result<DetailedResponse<SharedDatasetResponseList>> {
        let req = RequestConfig::new(Method::GET, "/v2/shared_datasets", "ListSharedDatasets");
        self.service.request(ctx, req).await
    }

    /// Create a shared dataset
    pub async fn create_shared_dataset(
        &self,
        options: &CreateSharedDatasetOptions,
    ) -> Result<DetailedResponse<SharedDatasetResponse>> {
        self.create_shared_dataset_with_context(&Context::background(), options)
            .await
    }

    pub async fn create_shared_dataset_with_context(
        &self,
        ctx: &Context,
        options: &CreateSharedDatasetOptions,
    ) -> Result<DetailedResponse<SharedDatasetResponse>> {
        let req = RequestConfig::new(Method::POST, "/v2/shared_datasets", "CreateSharedDataset")
            .json(&options.dataset)?;
        self.service.request(ctx, req).await
    }

    /// Get a shared dataset
    pub async fn get_shared_dataset(
        &self,
        options: &GetSharedDatasetOptions,
    ) -> Result<DetailedResponse<SharedDatasetResponse>> {
        self.get_shared_dataset_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_shared_dataset_with_context(
        &self,
        ctx: &Context,
        options: &GetSharedDatasetOptions,
    ) -> Result<DetailedResponse<SharedDatasetResponse>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::GET,
            "/v2/shared_datasets/{sd_id}",
            "GetSharedDataset",
        )
        .path_param("sd_id", &options.sd_id);
        self.service.request(ctx, req).await
    }

    /// Replace a shared dataset
    pub async fn replace_shared_dataset(
        &self,
        options: &ReplaceSharedDatasetOptions,
    ) -> Result<DetailedResponse<SharedDatasetResponse>> {
        self.replace_shared_dataset_with_context(&Context::background(), options)
            .await
    }

    pub async fn replace_shared_dataset_with_context(
        &self,
        ctx: &Context,
        options: &ReplaceSharedDatasetOptions,
    ) -> Result<DetailedResponse<SharedDatasetResponse>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::PUT,
            "/v2/shared_datasets/{sd_id}",
            "ReplaceSharedDataset",
        )
        .path_param("sd_id", &options.sd_id)
        .json(&options.dataset)?;
        self.service.request(ctx, req).await
    }

    /// Delete a shared dataset, returning its last state
    pub async fn delete_shared_dataset(
        &self,
        options: &DeleteSharedDatasetOptions,
    ) -> Result<DetailedResponse<SharedDatasetResponse>> {
        self.delete_shared_dataset_with_context(&Context::background(), options)
            .await
    }

    pub async fn delete_shared_dataset_with_context(
        &self,
        ctx: &Context,
        options: &DeleteSharedDatasetOptions,
    ) -> Result<DetailedResponse<SharedDatasetResponse>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::DELETE,
            "/v2/shared_datasets/{sd_id}",
            "DeleteSharedDataset",
        )
        .path_param("sd_id", &options.sd_id);
        self.service.request(ctx, req).await
    }
}
