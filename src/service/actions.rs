//! Action operations

use super::workspaces::tar_part;
use super::{require, SchematicsV1};
use crate::error::Result;
use crate::http::{Context, DetailedResponse, RequestConfig};
use crate::models::{Action, ActionList, TemplateRepoTarUploadResponse};
use bytes::Bytes;
use reqwest::Method;

/// Options for [`SchematicsV1::create_action`]
#[derive(Debug, Clone, Default)]
pub struct CreateActionOptions {
    /// Action definition sent as the request body
    pub action: Action,
    /// Token for private GitHub repositories
    pub x_github_token: Option<String>,
}

impl CreateActionOptions {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            x_github_token: None,
        }
    }

    #[must_use]
    pub fn x_github_token(mut self, token: impl Into<String>) -> Self {
        self.x_github_token = Some(token.into());
        self
    }
}

/// Options for [`SchematicsV1::list_actions`]
#[derive(Debug, Clone, Default)]
pub struct ListActionsOptions {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    /// Sort field, e.g. `name` or `-created_at`
    pub sort: Option<String>,
    /// `ids` or `summary`
    pub profile: Option<String>,
}

impl ListActionsOptions {
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

    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    #[must_use]
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }
}

/// Options for [`SchematicsV1::get_action`]
#[derive(Debug, Clone, Default)]
pub struct GetActionOptions {
    pub action_id: String,
    /// `summary` or `detailed`
    pub profile: Option<String>,
}

impl GetActionOptions {
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            profile: None,
        }
    }

    #[must_use]
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("action_id", &self.action_id)
    }
}

/// Options for [`SchematicsV1::delete_action`]
#[derive(Debug, Clone, Default)]
pub struct DeleteActionOptions {
    pub action_id: String,
    /// Delete even while jobs are running
    pub force: Option<bool>,
    /// Propagate the deletion to dependent resources
    pub propagate: Option<bool>,
}

impl DeleteActionOptions {
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }

    #[must_use]
    pub fn propagate(mut self, propagate: bool) -> Self {
        self.propagate = Some(propagate);
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("action_id", &self.action_id)
    }
}

/// Options for [`SchematicsV1::update_action`]
#[derive(Debug, Clone, Default)]
pub struct UpdateActionOptions {
    pub action_id: String,
    /// Fields to change
    pub action: Action,
    /// Token for private GitHub repositories
    pub x_github_token: Option<String>,
}

impl UpdateActionOptions {
    pub fn new(action_id: impl Into<String>, action: Action) -> Self {
        Self {
            action_id: action_id.into(),
            action,
            x_github_token: None,
        }
    }

    #[must_use]
    pub fn x_github_token(mut self, token: impl Into<String>) -> Self {
        self.x_github_token = Some(token.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("action_id", &self.action_id)
    }
}

/// Options for [`SchematicsV1::upload_template_tar_action`]
#[derive(Debug, Clone, Default)]
pub struct UploadTemplateTarActionOptions {
    pub action_id: String,
    /// Tar file content
    pub file: Option<Bytes>,
    /// MIME type of `file`; defaults to `application/octet-stream`
    pub file_content_type: Option<String>,
}

impl UploadTemplateTarActionOptions {
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
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
        require("action_id", &self.action_id)
    }
}

impl SchematicsV1 {
    /// Create an action
    pub async fn create_action(
        &self,
        options: &CreateActionOptions,
    ) -> Result<DetailedResponse<Action>> {
        self.create_action_with_context(&Context::background(), options)
            .await
    }

    pub async fn create_action_with_context(
        &self,
        ctx: &Context,
        options: &CreateActionOptions,
    ) -> Result<DetailedResponse<Action>> {
        let req = RequestConfig::new(Method::POST, "/v2/actions", "CreateAction")
            .header_opt("X-Github-token", options.x_github_token.as_ref())
            .json(&options.action)?;
        self.service.request(ctx, req).await
    }

    /// List actions, one page at a time
    pub async fn list_actions(
        &self,
        options: &ListActionsOptions,
    ) -> Result<DetailedResponse<ActionList>> {
        self.list_actions_with_context(&Context::background(), options)
            .await
    }

    pub async fn list_actions_with_context(
        &self,
        ctx: &Context,
        options: &ListActionsOptions,
    ) -> Result<DetailedResponse<ActionList>> {
        let req = RequestConfig::new(Method::GET, "/v2/actions", "ListActions")
            .query_opt("offset", options.offset)
            .query_opt("limit", options.limit)
            .query_opt("sort", options.sort.as_ref())
            .query_opt("profile", options.profile.as_ref());
        self.service.request(ctx, req).await
    }

    /// Get an action
    pub async fn get_action(&self, options: &GetActionOptions) -> Result<DetailedResponse<Action>> {
        self.get_action_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_action_with_context(
        &self,
        ctx: &Context,
        options: &GetActionOptions,
    ) -> Result<DetailedResponse<Action>> {
        options.validate()?;
        let req = RequestConfig::new(Method::GET, "/v2/actions/{action_id}", "GetAction")
            .path_param("action_id", &options.action_id)
            .query_opt("profile", options.profile.as_ref());
        self.service.request(ctx, req).await
    }

    /// Delete an action; the response has no body
    pub async fn delete_action(&self, options: &DeleteActionOptions) -> Result<DetailedResponse<()>> {
        self.delete_action_with_context(&Context::background(), options)
            .await
    }

    pub async fn delete_action_with_context(
        &self,
        ctx: &Context,
        options: &DeleteActionOptions,
    ) -> Result<DetailedResponse<()>> {
        options.validate()?;
        let req = RequestConfig::new(Method::DELETE, "/v2/actions/{action_id}", "DeleteAction")
            .path_param("action_id", &options.action_id)
            .header_opt("force", options.force)
            .header_opt("propagate", options.propagate);
        self.service.request_no_content(ctx, req).await
    }

    /// Update an action
    pub async fn update_action(
        &self,
        options: &UpdateActionOptions,
    ) -> Result<DetailedResponse<Action>> {
        self.update_action_with_context(&Context::background(), options)
            .await
    }

    pub async fn update_action_with_context(
        &self,
        ctx: &Context,
        options: &UpdateActionOptions,
    ) -> Result<DetailedResponse<Action>> {
        options.validate()?;
        let req = RequestConfig::new(Method::PATCH, "/v2/actions/{action_id}", "UpdateAction")
            .path_param("action_id", &options.action_id)
            .header_opt("X-Github-token", options.x_github_token.as_ref())
            .json(&options.action)?;
        self.service.request(ctx, req).await
    }

    /// Upload a tar file holding an action's playbooks
    pub async fn upload_template_tar_action(
        &self,
        options: &UploadTemplateTarActionOptions,
    ) -> Result<DetailedResponse<TemplateRepoTarUploadResponse>> {
        self.upload_template_tar_action_with_context(&Context::background(), options)
            .await
    }

    pub async fn upload_template_tar_action_with_context(
        &self,
        ctx: &Context,
        options: &UploadTemplateTarActionOptions,
    ) -> Result<DetailedResponse<TemplateRepoTarUploadResponse>> {
        options.validate()?;
        let mut req = RequestConfig::new(
            Method::PUT,
            "/v2/actions/{action_id}/template_repo_upload",
            "UploadTemplateTarAction",
        )
        .path_param("action_id", &options.action_id);
        if let Some(file) = &options.file {
            req = req.file(tar_part(file, options.file_content_type.as_ref()));
        }
        self.service.request(ctx, req).await
    }
}
