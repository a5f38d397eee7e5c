//! Service-wide lookups: locations, resource groups, version, template metadata

use super::action::VariableData;
use serde::{Deserialize, Serialize};

/// A location where Schematics runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchematicsLocations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub geography: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metro: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multizone_metro: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Condensed location entry of the v2 location list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchematicsLocationsLite {
    /// e.g. `us-south`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metro: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub geography_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub geography: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paired_region: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted: Option<bool>,
}

/// v2 location list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchematicsLocationsList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<SchematicsLocationsLite>>,
}

/// A resource group of the account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceGroupResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Build information of the running service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builddate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildno: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitsha: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub helm_provider_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub helm_version: Option<String>,

    /// Supported template types and their engine versions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_template_types: Option<crate::types::JsonValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub terraform_provider_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
}

/// Variables discovered in a template source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateMetaDataResponse {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<VariableData>>,
}
