//! Service-wide lookups

use super::{require, SchematicsV1};
use crate::error::Result;
use crate::http::{Context, DetailedResponse, RequestConfig};
use crate::models::{
    ExternalSource, ResourceGroupResponse, SchematicsLocations, SchematicsLocationsList,
    TemplateMetaDataResponse, VersionResponse,
};
use reqwest::Method;
use serde::Serialize;

/// Options for [`SchematicsV1::list_schematics_location`]
#[derive(Debug, Clone, Default)]
pub struct ListSchematicsLocationOptions;

impl ListSchematicsLocationOptions {
    pub fn new() -> Self {
        Self
    }
}

/// Options for [`SchematicsV1::list_locations`]
#[derive(Debug, Clone, Default)]
pub struct ListLocationsOptions;

impl ListLocationsOptions {
    pub fn new() -> Self {
        Self
    }
}

/// Options for [`SchematicsV1::list_resource_group`]
#[derive(Debug, Clone, Default)]
pub struct ListResourceGroupOptions;

impl ListResourceGroupOptions {
    pub fn new() -> Self {
        Self
    }
}

/// Options for [`SchematicsV1::get_schematics_version`]
#[derive(Debug, Clone, Default)]
pub struct GetSchematicsVersionOptions;

impl GetSchematicsVersionOptions {
    pub fn new() -> Self {
        Self
    }
}

/// Options for [`SchematicsV1::process_template_meta_data`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessTemplateMetaDataOptions {
    /// Template type, e.g. `terraform`
    pub template_type: String,

    /// Where the template lives
    pub source: ExternalSource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    /// Token for private GitHub repositories
    #[serde(skip)]
    pub x_github_token: Option<String>,
}

impl ProcessTemplateMetaDataOptions {
    pub fn new(template_type: impl Into<String>, source: ExternalSource) -> Self {
        Self {
            template_type: template_type.into(),
            source,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }

    #[must_use]
    pub fn x_github_token(mut self, token: impl Into<String>) -> Self {
        self.x_github_token = Some(token.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("template_type", &self.template_type)
    }
}

impl SchematicsV1 {
    /// List the locations where Schematics can run workspaces
    pub async fn list_schematics_location(
        &self,
        options: &ListSchematicsLocationOptions,
    ) -> Result<DetailedResponse<Vec<SchematicsLocations>>> {
        self.list_schematics_location_with_context(&Context::background(), options)
            .await
    }

    pub async fn list_schematics_location_with_context(
        &self,
        ctx: &Context,
        _options: &ListSchematicsLocationOptions,
    ) -> Result<DetailedResponse<Vec<SchematicsLocations>>> {
        let req = RequestConfig::new(Method::GET, "/v1/locations", "ListSchematicsLocation");
        self.service.request(ctx, req).await
    }

    /// List regions and their metadata
    pub async fn list_locations(
        &self,
        options: &ListLocationsOptions,
    ) -> Result<DetailedResponse<SchematicsLocationsList>> {
        self.list_locations_with_context(&Context::background(), options)
            .await
    }

    pub async fn list_locations_with_context(
        &self,
        ctx: &Context,
        _options: &ListLocationsOptions,
    ) -> Result<DetailedResponse<SchematicsLocationsList>> {
        let req = RequestConfig::new(Method::GET, "/v2/locations", "ListLocations");
        self.service.request(ctx, req).await
    }

    /// List the account's resource groups
    pub async fn list_resource_group(
        &self,
        options: &ListResourceGroupOptions,
    ) -> Result<DetailedResponse<Vec<ResourceGroupResponse>>> {
        self.list_resource_group_with_context(&Context::background(), options)
            .await
    }

    pub async fn list_resource_group_with_context(
        &self,
        ctx: &Context,
        _options: &ListResourceGroupOptions,
    ) -> Result<DetailedResponse<Vec<ResourceGroupResponse>>> {
        let req = RequestConfig::new(Method::GET, "/v1/resource_groups", "ListResourceGroup");
        self.service.request(ctx, req).await
    }

    /// Version and build information of the service
    pub async fn get_schematics_version(
        &self,
        options: &GetSchematicsVersionOptions,
    ) -> Result<DetailedResponse<VersionResponse>> {
        self.get_schematics_version_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_schematics_version_with_context(
        &self,
        ctx: &Context,
        _options: &GetSchematicsVersionOptions,
    ) -> Result<DetailedResponse<VersionResponse>> {
        let req = RequestConfig::new(Method::GET, "/v1/version", "GetSchematicsVersion");
        self.service.request(ctx, req).await
    }

    /// Discover the variables a template source declares
    pub async fn process_template_meta_data(
        &self,
        options: &ProcessTemplateMetaDataOptions,
    ) -> Result<DetailedResponse<TemplateMetaDataResponse>> {
        self.process_template_meta_data_with_context(&Context::background(), options)
            .await
    }

    pub async fn process_template_meta_data_with_context(
        &self,
        ctx: &Context,
        options: &ProcessTemplateMetaDataOptions,
    ) -> Result<DetailedResponse<TemplateMetaDataResponse>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::POST,
            "/v2/template_metadata_processor",
            "ProcessTemplateMetaData",
        )
        .header_opt("X-Github-token", options.x_github_token.as_ref())
        .json(options)?;
        self.service.request(ctx, req).await
    }
}
