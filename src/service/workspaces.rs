//! Workspace operations

use super::{require, SchematicsV1};
use crate::error::Result;
use crate::http::{Context, DetailedResponse, FilePart, RequestConfig};
use crate::models::{
    CatalogRef, SharedTargetData, TemplateReadme, TemplateRepoRequest,
    TemplateRepoTarUploadResponse, TemplateRepoUpdateRequest, TemplateSourceDataRequest,
    WorkspaceResponse, WorkspaceResponseList, WorkspaceStatusRequest,
    WorkspaceStatusMessage, WorkspaceStatusUpdateRequest,
};
use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;

const OCTET_STREAM: &str = "application/octet-stream";

/// Options for [`SchematicsV1::list_workspaces`]
#[derive(Debug, Clone, Default)]
pub struct ListWorkspacesOptions {
    /// Number of workspaces to skip
    pub offset: Option<i64>,
    /// Page size
    pub limit: Option<i64>,
}

impl ListWorkspacesOptions {
    pub fn new() -> Self {
        Self::default()
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
}

/// Options for [`SchematicsV1::create_workspace`]
///
/// Every body field is optional; the service decides what a usable
/// workspace needs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateWorkspaceOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_shareddata_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_ref: Option<CatalogRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_data: Option<SharedTargetData>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_data: Option<Vec<TemplateSourceDataRequest>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_ref: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_repo: Option<TemplateRepoRequest>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_status: Option<WorkspaceStatusRequest>,

    /// Token for private GitHub repositories
    #[serde(skip)]
    pub x_github_token: Option<String>,
}

impl CreateWorkspaceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn applied_shareddata_ids(mut self, ids: Vec<String>) -> Self {
        self.applied_shareddata_ids = Some(ids);
        self
    }

    #[must_use]
    pub fn catalog_ref(mut self, catalog_ref: CatalogRef) -> Self {
        self.catalog_ref = Some(catalog_ref);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn resource_group(mut self, resource_group: impl Into<String>) -> Self {
        self.resource_group = Some(resource_group.into());
        self
    }

    #[must_use]
    pub fn shared_data(mut self, shared_data: SharedTargetData) -> Self {
        self.shared_data = Some(shared_data);
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn template_data(mut self, template_data: Vec<TemplateSourceDataRequest>) -> Self {
        self.template_data = Some(template_data);
        self
    }

    #[must_use]
    pub fn template_ref(mut self, template_ref: impl Into<String>) -> Self {
        self.template_ref = Some(template_ref.into());
        self
    }

    #[must_use]
    pub fn template_repo(mut self, template_repo: TemplateRepoRequest) -> Self {
        self.template_repo = Some(template_repo);
        self
    }

    #[must_use]
    pub fn type_(mut self, types: Vec<String>) -> Self {
        self.type_ = Some(types);
        self
    }

    #[must_use]
    pub fn workspace_status(mut self, status: WorkspaceStatusRequest) -> Self {
        self.workspace_status = Some(status);
        self
    }

    #[must_use]
    pub fn x_github_token(mut self, token: impl Into<String>) -> Self {
        self.x_github_token = Some(token.into());
        self
    }
}

/// Options for [`SchematicsV1::get_workspace`]
#[derive(Debug, Clone, Default)]
pub struct GetWorkspaceOptions {
    /// Workspace ID
    pub w_id: String,
}

impl GetWorkspaceOptions {
    pub fn new(w_id: impl Into<String>) -> Self {
        Self { w_id: w_id.into() }
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)
    }
}

/// Body shared by replace and update; both send the same fields
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkspaceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_ref: Option<CatalogRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_data: Option<SharedTargetData>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_data: Option<Vec<TemplateSourceDataRequest>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_repo: Option<TemplateRepoUpdateRequest>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_status: Option<WorkspaceStatusUpdateRequest>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_status_msg: Option<WorkspaceStatusMessage>,
}

/// Options for [`SchematicsV1::replace_workspace`]
#[derive(Debug, Clone, Default)]
pub struct ReplaceWorkspaceOptions {
    /// Workspace ID
    pub w_id: String,
    /// New workspace definition
    pub body: WorkspaceUpdate,
}

impl ReplaceWorkspaceOptions {
    pub fn new(w_id: impl Into<String>) -> Self {
        Self {
            w_id: w_id.into(),
            body: WorkspaceUpdate::default(),
        }
    }

    #[must_use]
    pub fn body(mut self, body: WorkspaceUpdate) -> Self {
        self.body = body;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)
    }
}

/// Options for [`SchematicsV1::update_workspace`]
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkspaceOptions {
    /// Workspace ID
    pub w_id: String,
    /// Fields to change
    pub body: WorkspaceUpdate,
}

impl UpdateWorkspaceOptions {
    pub fn new(w_id: impl Into<String>) -> Self {
        Self {
            w_id: w_id.into(),
            body: WorkspaceUpdate::default(),
        }
    }

    #[must_use]
    pub fn body(mut self, body: WorkspaceUpdate) -> Self {
        self.body = body;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)
    }
}

/// Options for [`SchematicsV1::delete_workspace`]
#[derive(Debug, Clone, Default)]
pub struct DeleteWorkspaceOptions {
    /// Workspace ID
    pub w_id: String,
    /// IAM refresh token
    pub refresh_token: String,
    /// Also destroy the provisioned resources
    pub destroy_resources: Option<String>,
}

impl DeleteWorkspaceOptions {
    pub fn new(w_id: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            w_id: w_id.into(),
            refresh_token: refresh_token.into(),
            destroy_resources: None,
        }
    }

    #[must_use]
    pub fn destroy_resources(mut self, destroy: impl Into<String>) -> Self {
        self.destroy_resources = Some(destroy.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)?;
        require("refresh_token", &self.refresh_token)
    }
}

/// Options for [`SchematicsV1::upload_template_tar`]
#[derive(Debug, Clone, Default)]
pub struct UploadTemplateTarOptions {
    /// Workspace ID
    pub w_id: String,
    /// Template ID
    pub t_id: String,
    /// Tar file content
    pub file: Option<Bytes>,
    /// MIME type of `file`; defaults to `application/octet-stream`
    pub file_content_type: Option<String>,
}

impl UploadTemplateTarOptions {
    pub fn new(w_id: impl Into<String>, t_id: impl Into<String>) -> Self {
        Self {
            w_id: w_id.into(),
            t_id: t_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn file(mut self, file: impl Into<Bytes>) -> Self {
        self.file = Some(file.into());
        self
    }

    #[must_use]
    pub fn file_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.file_content_type = Some(content_type.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)?;
        require("t_id", &self.t_id)
    }
}

/// Options for [`SchematicsV1::get_workspace_readme`]
#[derive(Debug, Clone, Default)]
pub struct GetWorkspaceReadmeOptions {
    /// Workspace ID
    pub w_id: String,
    /// GitHub branch or commit
    pub ref_: Option<String>,
    /// `markdown` or `html`
    pub formatted: Option<String>,
}

impl GetWorkspaceReadmeOptions {
    pub fn new(w_id: impl Into<String>) -> Self {
        Self {
            w_id: w_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn ref_(mut self, git_ref: impl Into<String>) -> Self {
        self.ref_ = Some(git_ref.into());
        self
    }

    #[must_use]
    pub fn formatted(mut self, formatted: impl Into<String>) -> Self {
        self.formatted = Some(formatted.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("w_id", &self.w_id)
    }
}

/// Multipart part for a template tar upload
pub(super) fn tar_part(file: &Bytes, content_type: Option<&String>) -> FilePart {
    FilePart {
        field: "file".to_string(),
        file_name: "filename".to_string(),
        content: file.clone(),
        content_type: content_type.map_or_else(|| OCTET_STREAM.to_string(), String::clone),
    }
}

impl SchematicsV1 {
    /// List workspaces, one page at a time
    pub async fn list_workspaces(
        &self,
        options: &ListWorkspacesOptions,
    ) -> Result<DetailedResponse<WorkspaceResponseList>> {
        self.list_workspaces_with_context(&Context::background(), options)
            .await
    }

    pub async fn list_workspaces_with_context(
        &self,
        ctx: &Context,
        options: &ListWorkspacesOptions,
    ) -> Result<DetailedResponse<WorkspaceResponseList>> {
        let req = RequestConfig::new(Method::GET, "/v1/workspaces", "ListWorkspaces")
            .query_opt("offset", options.offset)
            .query_opt("limit", options.limit);
        self.service.request(ctx, req).await
    }

    /// Create a workspace
    pub async fn create_workspace(
        &self,
        options: &CreateWorkspaceOptions,
    ) -> Result<DetailedResponse<WorkspaceResponse>> {
        self.create_workspace_with_context(&Context::background(), options)
            .await
    }

    pub async fn create_workspace_with_context(
        &self,
        ctx: &Context,
        options: &CreateWorkspaceOptions,
    ) -> Result<DetailedResponse<WorkspaceResponse>> {
        let req = RequestConfig::new(Method::POST, "/v1/workspaces", "CreateWorkspace")
            .header_opt("X-Github-token", options.x_github_token.as_ref())
            .json(options)?;
        self.service.request(ctx, req).await
    }

    /// Get a workspace
    pub async fn get_workspace(
        &self,
        options: &GetWorkspaceOptions,
    ) -> Result<DetailedResponse<WorkspaceResponse>> {
        self.get_workspace_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_workspace_with_context(
        &self,
        ctx: &Context,
        options: &GetWorkspaceOptions,
    ) -> Result<DetailedResponse<WorkspaceResponse>> {
        options.validate()?;
        let req = RequestConfig::new(Method::GET, "/v1/workspaces/{w_id}", "GetWorkspace")
            .path_param("w_id", &options.w_id);
        self.service.request(ctx, req).await
    }

    /// Replace a workspace definition
    pub async fn replace_workspace(
        &self,
        options: &ReplaceWorkspaceOptions,
    ) -> Result<DetailedResponse<WorkspaceResponse>> {
        self.replace_workspace_with_context(&Context::background(), options)
            .await
    }

    pub async fn replace_workspace_with_context(
        &self,
        ctx: &Context,
        options: &ReplaceWorkspaceOptions,
    ) -> Result<DetailedResponse<WorkspaceResponse>> {
        options.validate()?;
        let req = RequestConfig::new(Method::PUT, "/v1/workspaces/{w_id}", "ReplaceWorkspace")
            .path_param("w_id", &options.w_id)
            .json(&options.body)?;
        self.service.request(ctx, req).await
    }

    /// Delete a workspace, optionally destroying its resources
    ///
    /// The service answers with a plain JSON string.
    pub async fn delete_workspace(
        &self,
        options: &DeleteWorkspaceOptions,
    ) -> Result<DetailedResponse<String>> {
        self.delete_workspace_with_context(&Context::background(), options)
            .await
    }

    pub async fn delete_workspace_with_context(
        &self,
        ctx: &Context,
        options: &DeleteWorkspaceOptions,
    ) -> Result<DetailedResponse<String>> {
        options.validate()?;
        let req = RequestConfig::new(Method::DELETE, "/v1/workspaces/{w_id}", "DeleteWorkspace")
            .path_param("w_id", &options.w_id)
            .header("refresh_token", &options.refresh_token)
            .query_opt("destroyResources", options.destroy_resources.as_ref());
        self.service.request(ctx, req).await
    }

    /// Update selected fields of a workspace
    pub async fn update_workspace(
        &self,
        options: &UpdateWorkspaceOptions,
    ) -> Result<DetailedResponse<WorkspaceResponse>> {
        self.update_workspace_with_context(&Context::background(), options)
            .await
    }

    pub async fn update_workspace_with_context(
        &self,
        ctx: &Context,
        options: &UpdateWorkspaceOptions,
    ) -> Result<DetailedResponse<WorkspaceResponse>> {
        options.validate()?;
        let req = RequestConfig::new(Method::PATCH, "/v1/workspaces/{w_id}", "UpdateWorkspace")
            .path_param("w_id", &options.w_id)
            .json(&options.body)?;
        self.service.request(ctx, req).await
    }

    /// Upload a tar file holding a workspace template
    pub async fn upload_template_tar(
        &self,
        options: &UploadTemplateTarOptions,
    ) -> Result<DetailedResponse<TemplateRepoTarUploadResponse>> {
        self.upload_template_tar_with_context(&Context::background(), options)
            .await
    }

    pub async fn upload_template_tar_with_context(
        &self,
        ctx: &Context,
        options: &UploadTemplateTarOptions,
    ) -> Result<DetailedResponse<TemplateRepoTarUploadResponse>> {
        options.validate()?;
        let mut req = RequestConfig::new(
            Method::PUT,
            "/v1/workspaces/{w_id}/template_data/{t_id}/template_repo_upload",
            "UploadTemplateTar",
        )
        .path_param("w_id", &options.w_id)
        .path_param("t_id", &options.t_id);
        if let Some(file) = &options.file {
            req = req.file(tar_part(file, options.file_content_type.as_ref()));
        }
        self.service.request(ctx, req).await
    }

    /// Readme of the workspace's template repository
    pub async fn get_workspace_readme(
        &self,
        options: &GetWorkspaceReadmeOptions,
    ) -> Result<DetailedResponse<TemplateReadme>> {
        self.get_workspace_readme_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_workspace_readme_with_context(
        &self,
        ctx: &Context,
        options: &GetWorkspaceReadmeOptions,
    ) -> Result<DetailedResponse<TemplateReadme>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::GET,
            "/v1/workspaces/{w_id}/templates/readme",
            "GetWorkspaceReadme",
        )
        .path_param("w_id", &options.w_id)
        .query_opt("ref", options.ref_.as_ref())
        .query_opt("formatted", options.formatted.as_ref());
        self.service.request(ctx, req).await
    }
}
