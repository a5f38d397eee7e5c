//! KMS settings operations

use super::{require, SchematicsV1};
use crate::error::Result;
use crate::http::{Context, DetailedResponse, RequestConfig};
use crate::models::{KmsDiscovery, KmsSettings};
use reqwest::Method;

/// Options for [`SchematicsV1::get_kms_settings`]
#[derive(Debug, Clone, Default)]
pub struct GetKmsSettingsOptions {
    /// Location, e.g. `US` or `EU`
    pub location: String,
}

impl GetKmsSettingsOptions {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("location", &self.location)
    }
}

/// Options for [`SchematicsV1::replace_kms_settings`]
#[derive(Debug, Clone, Default)]
pub struct ReplaceKmsSettingsOptions {
    pub settings: KmsSettings,
}

impl ReplaceKmsSettingsOptions {
    pub fn new(settings: KmsSettings) -> Self {
        Self { settings }
    }
}

/// Options for [`SchematicsV1::get_discovered_kms_instances`]
#[derive(Debug, Clone, Default)]
pub struct GetDiscoveredKmsInstancesOptions {
    /// `byok` or `kyok`
    pub encryption_scheme: String,
    pub location: String,
    pub resource_group: Option<String>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
}

impl GetDiscoveredKmsInstancesOptions {
    pub fn new(encryption_scheme: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            encryption_scheme: encryption_scheme.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn resource_group(mut self, resource_group: impl Into<String>) -> Self {
        self.resource_group = Some(resource_group.into());
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

    pub fn validate(&self) -> Result<()> {
        require("encryption_scheme", &self.encryption_scheme)?;
        require("location", &self.location)
    }
}

impl SchematicsV1 {
    /// KMS settings of a location
    pub async fn get_kms_settings(
        &self,
        options: &GetKmsSettingsOptions,
    ) -> Result<DetailedResponse<KmsSettings>> {
        self.get_kms_settings_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_kms_settings_with_context(
        &self,
        ctx: &Context,
        options: &GetKmsSettingsOptions,
    ) -> Result<DetailedResponse<KmsSettings>> {
        options.validate()?;
        let req = RequestConfig::new(Method::GET, "/v2/settings/kms", "GetKmsSettings")
            .query("location", &options.location);
        self.service.request(ctx, req).await
    }

    /// Replace the KMS settings of a location
    pub async fn replace_kms_settings(
        &self,
        options: &ReplaceKmsSettingsOptions,
    ) -> Result<DetailedResponse<KmsSettings>> {
        self.replace_kms_settings_with_context(&Context::background(), options)
            .await
    }

    pub async fn replace_kms_settings_with_context(
        &self,
        ctx: &Context,
        options: &ReplaceKmsSettingsOptions,
    ) -> Result<DetailedResponse<KmsSettings>> {
        let req = RequestConfig::new(Method::PUT, "/v2/settings/kms", "ReplaceKmsSettings")
            .json(&options.settings)?;
        self.service.request(ctx, req).await
    }

    /// KMS instances the account can use for a location
    pub async fn get_discovered_kms_instances(
        &self,
        options: &GetDiscoveredKmsInstancesOptions,
    ) -> Result<DetailedResponse<KmsDiscovery>> {
        self.get_discovered_kms_instances_with_context(&Context::background(), options)
            .await
    }

    pub async fn get_discovered_kms_instances_with_context(
        &self,
        ctx: &Context,
        options: &GetDiscoveredKmsInstancesOptions,
    ) -> Result<DetailedResponse<KmsDiscovery>> {
        options.validate()?;
        let req = RequestConfig::new(
            Method::GET,
            "/v2/settings/kms_instances",
            "GetDiscoveredKmsInstances",
        )
        .query("encryption_scheme", &options.encryption_scheme)
        .query("location", &options.location)
        .query_opt("resource_group", options.resource_group.as_ref())
        .query_opt("limit", options.limit)
        .query_opt("sort", options.sort.as_ref());
        self.service.request(ctx, req).await
    }
}
