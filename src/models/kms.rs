//! KMS settings and discovered key-management instances

use serde::{Deserialize, Serialize};

/// Primary customer root key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmsSettingsPrimaryCrk {
    /// `kp` (Key Protect) or `hpcs` (Hyper Protect Crypto Services)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_name: Option<String>,

    /// Private endpoint of the KMS instance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_private_endpoint: Option<String>,

    /// CRN of the root key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_crn: Option<String>,
}

/// Secondary customer root key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmsSettingsSecondaryCrk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_private_endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_crn: Option<String>,
}

/// KMS configuration of a location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmsSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// `byok` or `kyok`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_scheme: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_crk: Option<KmsSettingsPrimaryCrk>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_crk: Option<KmsSettingsSecondaryCrk>,
}

/// A root key held by a KMS instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmsInstancesKeysItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A KMS instance available to the account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmsInstances {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_scheme: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_crn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_private_endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_public_endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<KmsInstancesKeysItem>>,
}

/// KMS instances discovered for a location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KmsDiscovery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_instances: Option<Vec<KmsInstances>>,
}
