//! Job operations

use super::{require, SchematicsV1};
use crate::error::Result;
use crate::http::{Context, DetailedResponse, RequestConfig};
use crate::models::{Job, JobList, JobLog, JobStateData};
use reqwest::Method;

/// Options for [`SchematicsV1::list_jobs`]
#[derive(Debug, Clone, Default)]
pub struct ListJobsOptions {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
    /// `ids` or `summary`
    pub profile: Option<String>,
    /// `workspaces` or `actions`
    pub resource: Option<String>,
    /// Only jobs of this action
    pub action_id: Option<String>,
    /// `all`
    pub list: Option<String>,
}

impl ListJobsOptions {
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

    #[must_use]
    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    #[must_use]
    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    #[must_use]
    pub fn list(mut self, list: impl Into<String>) -> Self {
        self.list = Some(list.into());
        self
    }
}

/// Options for [`SchematicsV1::create_job`]
#[derive(Debug, Clone, Default)]
pub struct CreateJobOptions {
    /// IAM refresh token
    pub refresh_token: String,
    /// Job definition sent as the request body
    pub job: Job,
}

impl CreateJobOptions {
    pub fn new(refresh_token: impl Into<String>, job: Job) -> Self {
        Self {
            refresh_token: refresh_token.into(),
            job,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("refresh_token", &self.refresh_token)
    }
}

/// Options for [`SchematicsV1::get_job`]
#[derive(Debug, Clone, Default)]
pub struct GetJobOptions {
    pub job_id: String,
    /// `summary` or `detailed`
    pub profile: Option<String>,
}

impl GetJobOptions {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            profile: None,
        }
    }

    #[must_use]
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("job_id", &self.job_id)
    }
}

/// Options for [`SchematicsV1::update_job`]
#[derive(Debug, Clone, Default)]
pub struct UpdateJobOptions {
    pub job_id: String,
    /// IAM refresh token
    pub refresh_token: String,
    /// Fields to change
    pub job: Job,
}

impl UpdateJobOptions {
    pub fn new(job_id: impl Into<String>, refresh_token: impl Into<String>, job: Job) -> Self {
        Self {
            job_id: job_id.into(),
            refresh_token: refresh_token.into(),
            job,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("job_id", &self.job_id)?;
        require("refresh_token", &self.refresh_token)
    }
}

/// Options for [`SchematicsV1::delete_job`]
#[derive(Debug, Clone, Default)]
pub struct DeleteJobOptions {
    pub job_id: String,
    /// IAM refresh token
    pub refresh_token: String,
    /// Delete even while the job runs
    pub force: Option<bool>,
    /// Propagate the deletion to dependent resources
    pub propagate: Option<bool>,
}

impl DeleteJobOptions {
    pub fn new(job_id: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            refresh_token: refresh_token.into(),
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
        require("job_id", &self.job_id)?;
        require("refresh_token", &self.refresh_token)
    }
}

/// Options naming one job
#[derive(Debug, Clone, Default)]
pub struct JobIdOptions {
    pub job_id: String,
}

impl JobIdOptions {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("job_id", &self.job_id)
    }
}

pub type ListJobLogsOptions = JobIdOptions;
pub type ListJobStatesOptions = JobIdOptions;

impl SchematicsV1 {
    /// List jobs, one page at a time
    pub async fn list_jobs(&self, options: &ListJobsOptions) -> Result<DetailedResponse<JobList>> {
        self.list_jobs_with_context(&Context::background(), options)
            .await
    }

    pub async fn list_jobs_with_context(
        &self,
        ctx: &Context,
        options: &ListJobsOptions,
    ) -> Result<DetailedResponse<JobList>> {
        let req = RequestConfig::new(Method::GET, "/v2/jobs", "ListJobs")
            .query_opt("offset", options.offset)
            .query_opt("limit", options.limit)
            .query_opt("sort", options.sort.as_ref())
            .query_opt("profile", options.profile.as_ref())
            .query_opt("resource", options.resource.as_ref())
            .query_opt("action_id", options.action_id.as_ref())
            .query_opt("list", options.list.as_ref());
        self.service.request(ctx, req).await
    }

    /// Submit a job
    pub async fn create_job(&self, options: &CreateJobOptions) -> Result<DetailedResponse<Job>> {
        self.create_job_with_context(&Context::background(), options)
            .await
    }

    pub async fn create_job_with_context(
        &self,
        ctx: &Context,
        options: &CreateJobOptions,
    ) -> Result<DetailedResponse<Job>> {
        options.validate()?;
        let req = RequestConfig::new(Method::POST, "/v2/jobs", "CreateJob")
            .header("refresh_token", &options.refresh_token)
            .json(&options.job)?;
        self.service.request(ctx, req).await
    }

    /// Get a job
    pub async fn get_job(&self, options: &GetJobOptions) -> Result<DetailedResponse<Job>> {
        self.get_job_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_job_with_context(
        &self,
        ctx: &Context,
        options: &GetJobOptions,
    ) -> Result<DetailedResponse<Job>> {
        options.validate()?;
        let req = RequestConfig::new(Method::GET, "/v2/jobs/{job_id}", "GetJob")
            .path_param("job_id", &options.job_id)
            .query_opt("profile", options.profile.as_ref());
        self.service.request(ctx, req).await
    }

    /// Re-run or change a job
    pub async fn update_job(&self, options: &UpdateJobOptions) -> Result<DetailedResponse<Job>> {
        self.update_job_with_context(&Context::background(), options)
            .await
    }

    pub async fn update_job_with_context(
        &self,
        ctx: &Context,
        options: &UpdateJobOptions,
    ) -> Result<DetailedResponse<Job>> {
        options.validate()?;
        let req = RequestConfig::new(Method::PUT, "/v2/jobs/{job_id}", "UpdateJob")
            .path_param("job_id", &options.job_id)
            .header("refresh_token", &options.refresh_token)
            .json(&options.job)?;
        self.service.request(ctx, req).await
    }

    /// Stop and delete a job; the response has no body
    pub async fn delete_job(&self, options: &DeleteJobOptions) -> Result<DetailedResponse<()>> {
        self.delete_job_with_context(&Context::background(), options)
            .await
    }

    pub async fn delete_job_with_context(
        &self,
        ctx: &Context,
        options: &DeleteJobOptions,
    ) -> Result<DetailedResponse<()>> {
        options.validate()?;
        let req = RequestConfig::new(Method::DELETE, "/v2/jobs/{job_id}", "DeleteJob")
            .path_param("job_id", &options.job_id)
            .header("refresh_token", &options.refresh_token)
            .header_opt("force", options.force)
            .header_opt("propagate", options.propagate);
        self.service.request_no_content(ctx, req).await
    }

    /// Log output of a job
    pub async fn list_job_logs(&self, options: &ListJobLogsOptions) -> Result<DetailedResponse<JobLog>> {
        self.list_job_logs_with_context(&Context::background(), options)
            .await
    }

    pub async fn list_job_logs_with_context(
        &self,
        ctx: &Context,
        options: &ListJobLogsOptions,
    ) -> Result<DetailedResponse<JobLog>> {
        options.validate()?;
        let req = RequestConfig::new(Method::GET, "/v2/jobs/{job_id}/logs", "ListJobLogs")
            .path_param("job_id", &options.job_id);
        self.service.request(ctx, req).await
    }

    /// State recorded by a job
    pub async fn list_job_states(
        &self,
        options: &ListJobStatesOptions,
    ) -> Result<DetailedResponse<JobStateData>> {
        self.list_job_states_with_context(&Context::background(), options)
            .await
    }

    pub async fn list_job_states_with_context(
        &self,
        ctx: &Context,
        options: &ListJobStatesOptions,
    ) -> Result<DetailedResponse<JobStateData>> {
        options.validate()?;
        let req = RequestConfig::new(Method::GET, "/v2/jobs/{job_id}/states", "ListJobStates")
            .path_param("job_id", &options.job_id);
        self.service.request(ctx, req).await
    }
}
