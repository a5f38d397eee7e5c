//! Template data operations: inputs, outputs, resources, state and logs

use super::{require, SchematicsV1};
use crate::error::Result;
use crate::http::{Context, DetailedResponse, RequestConfig};
use crate::models::{
    LogStoreResponseList, OutputValuesInner, StateStoreResponseList, TemplateResources,
    TemplateStateStore, TemplateValues, UserValues, WorkspaceActivityLogs,
    WorkspaceTemplateValuesResponse, WorkspaceVariableRequest,
};
use crate::types::JsonValue;
use reqwest::Method;
use serde::Serialize;

/// Options naming one workspace
///
/// Used by every template operation that only needs the workspace ID.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceIdOptions {
    /// Workspace ID
    pub w_id: String,
}

impl WorkspaceIdOptions {
    pub fn new(w_id: impl Into<String>) -> Self {
        Self { w_id: w_id.into() }
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)
    }
}

pub type GetAllWorkspaceInputsOptions = WorkspaceIdOptions;
pub type GetWorkspaceOutputsOptions = WorkspaceIdOptions;
pub type GetWorkspaceResourcesOptions = WorkspaceIdOptions;
pub type GetWorkspaceStateOptions = WorkspaceIdOptions;
pub type GetWorkspaceLogUrlsOptions = WorkspaceIdOptions;

/// Options naming one template of a workspace
#[derive(Debug, Clone, Default)]
pub struct WorkspaceTemplateOptions {
    /// Workspace ID
    pub w_id: String,
    /// Template ID
    pub t_id: String,
}

impl WorkspaceTemplateOptions {
    pub fn new(w_id: impl Into<String>, t_id: impl Into<String>) -> Self {
        Self {
            w_id: w_id.into(),
            t_id: t_id.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)?;
        require("t_id", &self.t_id)
    }
}

pub type GetWorkspaceInputsOptions = WorkspaceTemplateOptions;
pub type GetWorkspaceInputMetadataOptions = WorkspaceTemplateOptions;
pub type GetWorkspaceTemplateStateOptions = WorkspaceTemplateOptions;

/// Options for [`SchematicsV1::replace_workspace_inputs`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplaceWorkspaceInputsOptions {
    /// Workspace ID
    #[serde(skip)]
    pub w_id: String,

    /// Template ID
    #[serde(skip)]
    pub t_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_values: Option<Vec<JsonValue>>,

    /// Raw tfvars content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variablestore: Option<Vec<WorkspaceVariableRequest>>,
}

impl ReplaceWorkspaceInputsOptions {
    pub fn new(w_id: impl Into<String>, t_id: impl Into<String>) -> Self {
        Self {
            w_id: w_id.into(),
            t_id: t_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn env_values(mut self, env_values: Vec<JsonValue>) -> Self {
        self.env_values = Some(env_values);
        self
    }

    #[must_use]
    pub fn values(mut self, values: impl Into<String>) -> Self {
        self.values = Some(values.into());
        self
    }

    #[must_use]
    pub fn variablestore(mut self, variables: Vec<WorkspaceVariableRequest>) -> Self {
        self.variablestore = Some(variables);
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)?;
        require("t_id", &self.t_id)
    }
}

/// Options for [`SchematicsV1::get_workspace_activity_logs`]
#[derive(Debug, Clone, Default)]
pub struct GetWorkspaceActivityLogsOptions {
    /// Workspace ID
    pub w_id: String,
    /// Activity ID
    pub activity_id: String,
}

impl GetWorkspaceActivityLogsOptions {
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

/// Which parts of a terraform log to include
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    /// Terraform command lines
    pub log_tf_cmd: Option<bool>,
    /// Terraform prefix lines
    pub log_tf_prefix: Option<bool>,
    /// Null resource output
    pub log_tf_null_resource: Option<bool>,
    /// Ansible output
    pub log_tf_ansible: Option<bool>,
}

impl LogFilter {
    fn apply(self, req: RequestConfig) -> RequestConfig {
        req.query_opt("log_tf_cmd", self.log_tf_cmd)
            .query_opt("log_tf_prefix", self.log_tf_prefix)
            .query_opt("log_tf_null_resource", self.log_tf_null_resource)
            .query_opt("log_tf_ansible", self.log_tf_ansible)
    }
}

/// Options for [`SchematicsV1::get_template_logs`]
#[derive(Debug, Clone, Default)]
pub struct GetTemplateLogsOptions {
    /// Workspace ID
    pub w_id: String,
    /// Template ID
    pub t_id: String,
    pub filter: LogFilter,
}

impl GetTemplateLogsOptions {
    pub fn new(w_id: impl Into<String>, t_id: impl Into<String>) -> Self {
        Self {
            w_id: w_id.into(),
            t_id: t_id.into(),
            filter: LogFilter::default(),
        }
    }

    #[must_use]
    pub fn filter(mut self, filter: LogFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)?;
        require("t_id", &self.t_id)
    }
}

/// Options for [`SchematicsV1::get_template_activity_log`]
#[derive(Debug, Clone, Default)]
pub struct GetTemplateActivityLogOptions {
    /// Workspace ID
    pub w_id: String,
    /// Template ID
    pub t_id: String,
    /// Activity ID
    pub activity_id: String,
    pub filter: LogFilter,
}

impl GetTemplateActivityLogOptions {
    pub fn new(
        w_id: impl Into<String>,
        t_id: impl Into<String>,
        activity_id: impl Into<String>,
    ) -> Self {
        Self {
            w_id: w_id.into(),
            t_id: t_id.into(),
            activity_id: activity_id.into(),
            filter: LogFilter::default(),
        }
    }

    #[must_use]
    pub fn filter(mut self, filter: LogFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)?;
        require("t_id", &self.t_id)?;
        require("activity_id", &self.activity_id)
    }
}

impl SchematicsV1 {
    /// Input values of one template
    pub async fn get_workspace_inputs(
        &self,
        options: &GetWorkspaceInputsOptions,
    ) -> Result<DetailedResponse<TemplateValues>> {
        self.get_workspace_inputs_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_workspace_inputs_with_context(
        &self,
        ctx: &Context,
        options: &GetWorkspaceInputsOptions,
    ) -> Result<DetailedResponse<TemplateValues>> {
        options.validate()?;
        let req = template_request(
            "/v1/workspaces/{w_id}/template_data/{t_id}/values",
            "GetWorkspaceInputs",
            options,
        );
        self.service.request(ctx, req).await
    }

    /// Replace the input values of one template
    pub async fn replace_workspace_inputs(
        &self,
        options: &ReplaceWorkspaceInputsOptions,
    ) -> Result<DetailedResponse<UserValues>> {
        self.replace_workspace_inputs_with_context(&Context::background(), options)
            .await
    }

    pub async fn replace_workspace_inputs_with_context(
        &self,
        ctx: &Context,
        options: &ReplaceWorkspaceInputsOptions,
    ) -> Result<DetailedResponse<UserValues>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::PUT,
            "/v1/workspaces/{w_id}/template_data/{t_id}/values",
            "ReplaceWorkspaceInputs",
        )
        .path_param("w_id", &options.w_id)
        .path_param("t_id", &options.t_id)
        .json(options)?;
        self.service.request(ctx, req).await
    }

    /// Input values of every template in a workspace
    pub async fn get_all_workspace_inputs(
        &self,
        options: &GetAllWorkspaceInputsOptions,
    ) -> Result<DetailedResponse<WorkspaceTemplateValuesResponse>> {
        self.get_all_workspace_inputs_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_all_workspace_inputs_with_context(
        &self,
        ctx: &Context,
        options: &GetAllWorkspaceInputsOptions,
    ) -> Result<DetailedResponse<WorkspaceTemplateValuesResponse>> {
        options.validate()?;
        let req = workspace_request(
            "/v1/workspaces/{w_id}/templates/values",
            "GetAllWorkspaceInputs",
            options,
        );
        self.service.request(ctx, req).await
    }

    /// Variable metadata of one template
    pub async fn get_workspace_input_metadata(
        &self,
        options: &GetWorkspaceInputMetadataOptions,
    ) -> Result<DetailedResponse<Vec<JsonValue>>> {
        self.get_workspace_input_metadata_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_workspace_input_metadata_with_context(
        &self,
        ctx: &Context,
        options: &GetWorkspaceInputMetadataOptions,
    ) -> Result<DetailedResponse<Vec<JsonValue>>> {
        options.validate()?;
        let req = template_request(
            "/v1/workspaces/{w_id}/template_data/{t_id}/values_metadata",
            "GetWorkspaceInputMetadata",
            options,
        );
        self.service.request(ctx, req).await
    }

    /// Terraform outputs of every template
    pub async fn get_workspace_outputs(
        &self,
        options: &GetWorkspaceOutputsOptions,
    ) -> Result<DetailedResponse<Vec<OutputValuesInner>>> {
        self.get_workspace_outputs_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_workspace_outputs_with_context(
        &self,
        ctx: &Context,
        options: &GetWorkspaceOutputsOptions,
    ) -> Result<DetailedResponse<Vec<OutputValuesInner>>> {
        options.validate()?;
        let req = workspace_request(
            "/v1/workspaces/{w_id}/output_values",
            "GetWorkspaceOutputs",
            options,
        );
        self.service.request(ctx, req).await
    }

    /// Resources provisioned by every template
    pub async fn get_workspace_resources(
        &self,
        options: &GetWorkspaceResourcesOptions,
    ) -> Result<DetailedResponse<Vec<TemplateResources>>> {
        self.get_workspace_resources_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_workspace_resources_with_context(
        &self,
        ctx: &Context,
        options: &GetWorkspaceResourcesOptions,
    ) -> Result<DetailedResponse<Vec<TemplateResources>>> {
        options.validate()?;
        let req = workspace_request(
            "/v1/workspaces/{w_id}/resources",
            "GetWorkspaceResources",
            options,
        );
        self.service.request(ctx, req).await
    }

    /// State store locations of every template
    pub async fn get_workspace_state(
        &self,
        options: &GetWorkspaceStateOptions,
    ) -> Result<DetailedResponse<StateStoreResponseList>> {
        self.get_workspace_state_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_workspace_state_with_context(
        &self,
        ctx: &Context,
        options: &GetWorkspaceStateOptions,
    ) -> Result<DetailedResponse<StateStoreResponseList>> {
        options.validate()?;
        let req = workspace_request(
            "/v1/workspaces/{w_id}/state_stores",
            "GetWorkspaceState",
            options,
        );
        self.service.request(ctx, req).await
    }

    /// Terraform state file of one template
    pub async fn get_workspace_template_state(
        &self,
        options: &GetWorkspaceTemplateStateOptions,
    ) -> Result<DetailedResponse<TemplateStateStore>> {
        self.get_workspace_template_state_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_workspace_template_state_with_context(
        &self,
        ctx: &Context,
        options: &GetWorkspaceTemplateStateOptions,
    ) -> Result<DetailedResponse<TemplateStateStore>> {
        options.validate()?;
        let req = template_request(
            "/v1/workspaces/{w_id}/runtime_data/{t_id}/state_store",
            "GetWorkspaceTemplateState",
            options,
        );
        self.service.request(ctx, req).await
    }

    /// Log URLs of one activity
    pub async fn get_workspace_activity_logs(
        &self,
        options: &GetWorkspaceActivityLogsOptions,
    ) -> Result<DetailedResponse<WorkspaceActivityLogs>> {
        self.get_workspace_activity_logs_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_workspace_activity_logs_with_context(
        &self,
        ctx: &Context,
        options: &GetWorkspaceActivityLogsOptions,
    ) -> Result<DetailedResponse<WorkspaceActivityLogs>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::GET,
            "/v1/workspaces/{w_id}/actions/{activity_id}/logs",
            "GetWorkspaceActivityLogs",
        )
        .path_param("w_id", &options.w_id)
        .path_param("activity_id", &options.activity_id);
        self.service.request(ctx, req).await
    }

    /// Log store locations of every template
    pub async fn get_workspace_log_urls(
        &self,
        options: &GetWorkspaceLogUrlsOptions,
    ) -> Result<DetailedResponse<LogStoreResponseList>> {
        self.get_workspace_log_urls_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_workspace_log_urls_with_context(
        &self,
        ctx: &Context,
        options: &GetWorkspaceLogUrlsOptions,
    ) -> Result<DetailedResponse<LogStoreResponseList>> {
        options.validate()?;
        let req = workspace_request(
            "/v1/workspaces/{w_id}/log_stores",
            "GetWorkspaceLogUrls",
            options,
        );
        self.service.request(ctx, req).await
    }

    /// Latest terraform log of one template, as a JSON string
    pub async fn get_template_logs(
        &self,
        options: &GetTemplateLogsOptions,
    ) -> Result<DetailedResponse<String>> {
        self.get_template_logs_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_template_logs_with_context(
        &self,
        ctx: &Context,
        options: &GetTemplateLogsOptions,
    ) -> Result<DetailedResponse<String>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::GET,
            "/v1/workspaces/{w_id}/runtime_data/{t_id}/log_store",
            "GetTemplateLogs",
        )
        .path_param("w_id", &options.w_id)
        .path_param("t_id", &options.t_id);
        self.service.request(ctx, options.filter.apply(req)).await
    }

    /// Terraform log of one template for one activity, as a JSON string
    pub async fn get_template_activity_log(
        &self,
        options: &GetTemplateActivityLogOptions,
    ) -> Result<DetailedResponse<String>> {
        self.get_template_activity_log_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_template_activity_log_with_context(
        &self,
        ctx: &Context,
        options: &GetTemplateActivityLogOptions,
    ) -> Result<DetailedResponse<String>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::GET,
            "/v1/workspaces/{w_id}/runtime_data/{t_id}/log_store/actions/{activity_id}",
            "GetTemplateActivityLog",
        )
        .path_param("w_id", &options.w_id)
        .path_param("t_id", &options.t_id)
        .path_param("activity_id", &options.activity_id);
        self.service.request(ctx, options.filter.apply(req)).await
    }
}

fn workspace_request(path: &str, operation_id: &str, options: &WorkspaceIdOptions) -> RequestConfig {
    RequestConfig::new(Method::GET, path, operation_id).path_param("w_id", &options.w_id)
}

fn template_request(
    path: &str,
    operation_id: &str,
    options: &WorkspaceTemplateOptions,
) -> RequestConfig {
    RequestConfig::new(Method::GET, path, operation_id)
        .path_param("w_id", &options.w_id)
        .path_param("t_id", &options.t_id)
}
