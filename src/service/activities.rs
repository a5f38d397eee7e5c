//! Workspace activity operations: terraform commands and their history

use super::{require, SchematicsV1};
use crate::error::Result;
use crate::http::{Context, DetailedResponse, RequestConfig};
use crate::models::{
    TerraformCommand, WorkspaceActivities, WorkspaceActivity, WorkspaceActivityCommandResult,
    WorkspaceActivityOptionsTemplate,
};
use reqwest::Method;
use serde::Serialize;

/// Options for [`SchematicsV1::list_workspace_activities`]
#[derive(Debug, Clone, Default)]
pub struct ListWorkspaceActivitiesOptions {
    /// Workspace ID
    pub w_id: String,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl ListWorkspaceActivitiesOptions {
    pub fn new(w_id: impl Into<String>) -> Self {
        Self {
            w_id: w_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)
    }
}

/// Options for [`SchematicsV1::get_workspace_activity`] and
/// [`SchematicsV1::delete_workspace_activity`]
#[derive(Debug, Clone, Default)]
pub struct WorkspaceActivityOptions {
    /// Workspace ID
    pub w_id: String,
    /// Activity ID
    pub activity_id: String,
}

impl WorkspaceActivityOptions {
    pub fn new(w_id: impl Into<String>, activity_id: impl Into<String>) -> Self {
        Self {
            w_id: w_id.into(),
            activity_id: activity_id.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)?;
        require("activity_id", &self.activity_id)
    }
}

/// Options for [`SchematicsV1::get_workspace_activity`]
pub type GetWorkspaceActivityOptions = WorkspaceActivityOptions;

/// Options for [`SchematicsV1::delete_workspace_activity`]
pub type DeleteWorkspaceActivityOptions = WorkspaceActivityOptions;

/// Options for [`SchematicsV1::run_workspace_commands`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunWorkspaceCommandsOptions {
    /// Workspace ID
    #[serde(skip)]
    pub w_id: String,

    /// IAM refresh token
    #[serde(skip)]
    pub refresh_token: String,

    /// Commands to run, in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<TerraformCommand>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RunWorkspaceCommandsOptions {
    pub fn new(w_id: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            w_id: w_id.into(),
            refresh_token: refresh_token.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn commands(mut self, commands: Vec<TerraformCommand>) -> Self {
        self.commands = Some(commands);
        self
    }

    #[must_use]
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)?;
        require("refresh_token", &self.refresh_token)
    }
}

/// Options for [`SchematicsV1::apply_workspace_command`] and
/// [`SchematicsV1::destroy_workspace_command`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkspaceCommandOptions {
    /// Workspace ID
    #[serde(skip)]
    pub w_id: String,

    /// IAM refresh token
    #[serde(skip)]
    pub refresh_token: String,

    /// Terraform targeting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_options: Option<WorkspaceActivityOptionsTemplate>,

    /// Token for cross-account resources
    #[serde(skip)]
    pub delegated_token: Option<String>,
}

impl WorkspaceCommandOptions {
    pub fn new(w_id: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            w_id: w_id.into(),
            refresh_token: refresh_token.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn action_options(mut self, options: WorkspaceActivityOptionsTemplate) -> Self {
        self.action_options = Some(options);
        self
    }

    #[must_use]
    pub fn delegated_token(mut self, token: impl Into<String>) -> Self {
        self.delegated_token = Some(token.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)?;
        require("refresh_token", &self.refresh_token)
    }
}

/// Options for [`SchematicsV1::apply_workspace_command`]
pub type ApplyWorkspaceCommandOptions = WorkspaceCommandOptions;

/// Options for [`SchematicsV1::destroy_workspace_command`]
pub type DestroyWorkspaceCommandOptions = WorkspaceCommandOptions;

/// Options for [`SchematicsV1::plan_workspace_command`] and
/// [`SchematicsV1::refresh_workspace_command`]; these send no body
#[derive(Debug, Clone, Default)]
pub struct WorkspaceTokenOptions {
    /// Workspace ID
    pub w_id: String,
    /// IAM refresh token
    pub refresh_token: String,
    /// Token for cross-account resources
    pub delegated_token: Option<String>,
}

impl WorkspaceTokenOptions {
    pub fn new(w_id: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            w_id: w_id.into(),
            refresh_token: refresh_token.into(),
            delegated_token: None,
        }
    }

    #[must_use]
    pub fn delegated_token(mut self, token: impl Into<String>) -> Self {
        self.delegated_token = Some(token.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)?;
        require("refresh_token", &self.refresh_token)
    }
}

/// Options for [`SchematicsV1::plan_workspace_command`]
pub type PlanWorkspaceCommandOptions = WorkspaceTokenOptions;

/// Options for [`SchematicsV1::refresh_workspace_command`]
pub type RefreshWorkspaceCommandOptions = WorkspaceTokenOptions;

impl SchematicsV1 {
    /// List a workspace's activities, one page at a time
    pub async fn list_workspace_activities(
        &self,
        options: &ListWorkspaceActivitiesOptions,
    ) -> Result<DetailedResponse<WorkspaceActivities>> {
        self.list_workspace_activities_with_context(&Context::background(), options)
            .await
    }

    pub async fn list_workspace_activities_with_context(
        &self,
        ctx: &Context,
        options: &ListWorkspaceActivitiesOptions,
    ) -> Result<DetailedResponse<WorkspaceActivities>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::GET,
            "/v1/workspaces/{w_id}/actions",
            "ListWorkspaceActivities",
        )
        .path_param("w_id", &options.w_id)
        .query_opt("offset", options.offset)
        .query_opt("limit", options.limit);
        self.service.request(ctx, req).await
    }

    /// Get one activity of a workspace
    pub async fn get_workspace_activity(
        &self,
        options: &GetWorkspaceActivityOptions,
    ) -> Result<DetailedResponse<WorkspaceActivity>> {
        self.get_workspace_activity_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_workspace_activity_with_context(
        &self,
        ctx: &Context,
        options: &GetWorkspaceActivityOptions,
    ) -> Result<DetailedResponse<WorkspaceActivity>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::GET,
            "/v1/workspaces/{w_id}/actions/{activity_id}",
            "GetWorkspaceActivity",
        )
        .path_param("w_id", &options.w_id)
        .path_param("activity_id", &options.activity_id);
        self.service.request(ctx, req).await
    }

    /// Stop a running activity
    pub async fn delete_workspace_activity(
        &self,
        options: &DeleteWorkspaceActivityOptions,
    ) -> Result<DetailedResponse<WorkspaceActivityCommandResult>> {
        self.delete_workspace_activity_with_context(&Context::background(), options)
            .await
    }

    pub async fn delete_workspace_activity_with_context(
        &self,
        ctx: &Context,
        options: &DeleteWorkspaceActivityOptions,
    ) -> Result<DetailedResponse<WorkspaceActivityCommandResult>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::DELETE,
            "/v1/workspaces/{w_id}/actions/{activity_id}",
            "DeleteWorkspaceActivity",
        )
        .path_param("w_id", &options.w_id)
        .path_param("activity_id", &options.activity_id);
        self.service.request(ctx, req).await
    }

    /// Run terraform commands such as `state show` against a workspace
    pub async fn run_workspace_commands(
        &self,
        options: &RunWorkspaceCommandsOptions,
    ) -> Result<DetailedResponse<WorkspaceActivityCommandResult>> {
        self.run_workspace_commands_with_context(&Context::background(), options)
            .await
    }

    pub async fn run_workspace_commands_with_context(
        &self,
        ctx: &Context,
        options: &RunWorkspaceCommandsOptions,
    ) -> Result<DetailedResponse<WorkspaceActivityCommandResult>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::PUT,
            "/v1/workspaces/{w_id}/commands",
            "RunWorkspaceCommands",
        )
        .path_param("w_id", &options.w_id)
        .header("refresh_token", &options.refresh_token)
        .json(options)?;
        self.service.request(ctx, req).await
    }

    /// Run `terraform apply`
    pub async fn apply_workspace_command(
        &self,
        options: &ApplyWorkspaceCommandOptions,
    ) -> Result<DetailedResponse<WorkspaceActivityCommandResult>> {
        self.apply_workspace_command_with_context(&Context::background(), options)
            .await
    }

    pub async fn apply_workspace_command_with_context(
        &self,
        ctx: &Context,
        options: &ApplyWorkspaceCommandOptions,
    ) -> Result<DetailedResponse<WorkspaceActivityCommandResult>> {
        self.workspace_command(ctx, options, "/v1/workspaces/{w_id}/apply", "ApplyWorkspaceCommand")
            .await
    }

    /// Run `terraform destroy`
    pub async fn destroy_workspace_command(
        &self,
        options: &DestroyWorkspaceCommandOptions,
    ) -> Result<DetailedResponse<WorkspaceActivityCommandResult>> {
        self.destroy_workspace_command_with_context(&Context::background(), options)
            .await
    }

    pub async fn destroy_workspace_command_with_context(
        &self,
        ctx: &Context,
        options: &DestroyWorkspaceCommandOptions,
    ) -> Result<DetailedResponse<WorkspaceActivityCommandResult>> {
        self.workspace_command(
            ctx,
            options,
            "/v1/workspaces/{w_id}/destroy",
            "DestroyWorkspaceCommand",
        )
        .await
    }

    /// Run `terraform plan`
    pub async fn plan_workspace_command(
        &self,
        options: &PlanWorkspaceCommandOptions,
    ) -> Result<DetailedResponse<WorkspaceActivityCommandResult>> {
        self.plan_workspace_command_with_context(&Context::background(), options)
            .await
    }

    pub async fn plan_workspace_command_with_context(
        &self,
        ctx: &Context,
        options: &PlanWorkspaceCommandOptions,
    ) -> Result<DetailedResponse<WorkspaceActivityCommandResult>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::POST,
            "/v1/workspaces/{w_id}/plan",
            "PlanWorkspaceCommand",
        )
        .path_param("w_id", &options.w_id)
        .header("refresh_token", &options.refresh_token)
        .header_opt("delegated_token", options.delegated_token.as_ref());
        self.service.request(ctx, req).await
    }

    /// Run `terraform refresh`
    pub async fn refresh_workspace_command(
        &self,
        options: &RefreshWorkspaceCommandOptions,
    ) -> Result<DetailedResponse<WorkspaceActivityCommandResult>> {
        self.refresh_workspace_command_with_context(&Context::background(), options)
            .await
    }

    pub async fn refresh_workspace_command_with_context(
        &self,
        ctx: &Context,
        options: &RefreshWorkspaceCommandOptions,
    ) -> Result<DetailedResponse<WorkspaceActivityCommandResult>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::PUT,
            "/v1/workspaces/{w_id}/refresh",
            "RefreshWorkspaceCommand",
        )
        .path_param("w_id", &options.w_id)
        .header("refresh_token", &options.refresh_token)
        .header_opt("delegated_token", options.delegated_token.as_ref());
        self.service.request(ctx, req).await
    }

    /// Apply and destroy share everything but the path
    async fn workspace_command(
        &self,
        ctx: &Context,
        options: &WorkspaceCommandOptions,
        path: &str,
        operation_id: &str,
    ) -> Result<DetailedResponse<WorkspaceActivityCommandResult>> {
        options.validate()?;
        let req = RequestConfig::new(Method::PUT, path, operation_id)
            .path_param("w_id", &options.w_id)
            .header("refresh_token", &options.refresh_token)
            .header_opt("delegated_token", options.delegated_token.as_ref())
            .json(options)?;
        self.service.request(ctx, req).await
    }
}
