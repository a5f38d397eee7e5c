//! Bulk workspace deletion

use super::{require, SchematicsV1};
use crate::error::Result;
use crate::http::{Context, DetailedResponse, RequestConfig};
use crate::models::{WorkspaceBulkDeleteResponse, WorkspaceJobResponse};
use reqwest::Method;
use serde::Serialize;

/// Options for [`SchematicsV1::create_workspace_deletion_job`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateWorkspaceDeletionJobOptions {
    /// IAM refresh token
    #[serde(skip)]
    pub refresh_token: String,

    #[serde(rename = "delete_workspaces", skip_serializing_if = "Option::is_none")]
    pub new_delete_workspaces: Option<bool>,

    #[serde(rename = "destroy_resources", skip_serializing_if = "Option::is_none")]
    pub new_destroy_resources: Option<bool>,

    /// Job name
    #[serde(rename = "job", skip_serializing_if = "Option::is_none")]
    pub new_job: Option<String>,

    #[serde(rename = "version", skip_serializing_if = "Option::is_none")]
    pub new_version: Option<String>,

    /// Workspace IDs to delete
    #[serde(rename = "workspaces", skip_serializing_if = "Option::is_none")]
    pub new_workspaces: Option<Vec<String>>,

    /// `destroy_resources` query flag
    #[serde(skip)]
    pub destroy_resources: Option<String>,
}

impl CreateWorkspaceDeletionJobOptions {
    pub fn new(refresh_token: impl Into<String>) -> Self {
        Self {
            refresh_token: refresh_token.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn new_delete_workspaces(mut self, delete: bool) -> Self {
        self.new_delete_workspaces = Some(delete);
        self
    }

    #[must_use]
    pub fn new_destroy_resources(mut self, destroy: bool) -> Self {
        self.new_destroy_resources = Some(destroy);
        self
    }

    #[must_use]
    pub fn new_job(mut self, job: impl Into<String>) -> Self {
        self.new_job = Some(job.into());
        self
    }

    #[must_use]
    pub fn new_version(mut self, version: impl Into<String>) -> Self {
        self.new_version = Some(version.into());
        self
    }

    #[must_use]
    pub fn new_workspaces(mut self, workspaces: Vec<String>) -> Self {
        self.new_workspaces = Some(workspaces);
        self
    }

    #[must_use]
    pub fn destroy_resources(mut self, destroy: impl Into<String>) -> Self {
        self.destroy_resources = Some(destroy.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("refresh_token", &self.refresh_token)
    }
}

/// Options for [`SchematicsV1::get_workspace_deletion_job_status`]
#[derive(Debug, Clone, Default)]
pub struct GetWorkspaceDeletionJobStatusOptions {
    /// Bulk deletion job ID
    pub wj_id: String,
}

impl GetWorkspaceDeletionJobStatusOptions {
    pub fn new(wj_id: impl Into<String>) -> Self {
        Self {
            wj_id: wj_id.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("wj_id", &self.wj_id)
    }
}

impl SchematicsV1 {
    /// Delete many workspaces in one background job
    pub async fn create_workspace_deletion_job(
        &self,
        options: &CreateWorkspaceDeletionJobOptions,
    ) -> Result<DetailedResponse<WorkspaceBulkDeleteResponse>> {
        self.create_workspace_deletion_job_with_context(&Context::background(), options)
            .await
    }

    pub async fn create_workspace_deletion_job_with_context(
        &self,
        ctx: &Context,
        options: &CreateWorkspaceDeletionJobOptions,
    ) -> Result<DetailedResponse<WorkspaceBulkDeleteResponse>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::POST,
            "/v1/workspace_jobs",
            "CreateWorkspaceDeletionJob",
        )
        .header("refresh_token", &options.refresh_token)
        .query_opt("destroy_resources", options.destroy_resources.as_ref())
        .json(options)?;
        self.service.request(ctx, req).await
    }

    /// Progress of a bulk deletion job
    pub async fn get_workspace_deletion_job_status(
        &self,
        options: &GetWorkspaceDeletionJobStatusOptions,
    ) -> Result<DetailedResponse<WorkspaceJobResponse>> {
        self.get_workspace_deletion_job_status_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_workspace_deletion_job_status_with_context(
        &self,
        ctx: &Context,
        options: &GetWorkspaceDeletionJobStatusOptions,
    ) -> Result<DetailedResponse<WorkspaceJobResponse>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::GET,
            "/v1/workspace_jobs/{wj_id}/status",
            "GetWorkspaceDeletionJobStatus",
        )
        .path_param("wj_id", &options.wj_id);
        self.service.request(ctx, req).await
    }
}
