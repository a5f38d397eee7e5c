//! Tests for client construction and option validation

use super::*;
use crate::auth::AuthType;
use crate::http::Context;
use crate::models::{ExternalSource, Job, KmsSettings};
use test_case::test_case;

fn client() -> SchematicsV1 {
    SchematicsV1::new(SchematicsV1Options {
        url: Some("https://schematicsv1/api".to_string()),
        authenticator: Some(Authenticator::no_auth()),
        ..Default::default()
    })
    .unwrap()
}

fn assert_missing(err: Error, field: &str) {
    match err {
        Error::Validation { field: f } => assert_eq!(f, field),
        other => panic!("expected validation error for {field}, got {other:?}"),
    }
}

#[test]
fn test_new_requires_authenticator() {
    let err = SchematicsV1::new(SchematicsV1Options::default()).unwrap_err();
    assert!(matches!(err, Error::Auth { .. }));
}

#[test]
fn test_new_uses_default_url() {
    let service = SchematicsV1::new(SchematicsV1Options {
        authenticator: Some(Authenticator::no_auth()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(service.service_url(), DEFAULT_SERVICE_URL);
    assert!(service.retry_config().is_none());
}

#[test]
fn test_new_rejects_bad_url() {
    let err = SchematicsV1::new(SchematicsV1Options {
        url: Some("{BAD_URL_STRING".to_string()),
        authenticator: Some(Authenticator::no_auth()),
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, Error::InvalidUrl { .. }));
}

#[test]
fn test_set_service_url() {
    let mut service = client();
    service.set_service_url("https://eu.schematics.cloud.ibm.com").unwrap();
    assert_eq!(service.service_url(), "https://eu.schematics.cloud.ibm.com");

    assert!(service.set_service_url("{BAD_URL_STRING").is_err());
    assert_eq!(service.service_url(), "https://eu.schematics.cloud.ibm.com");

    service.set_service_url("").unwrap();
    assert_eq!(service.service_url(), "");
}

#[test]
fn test_transport_toggles() {
    let mut service = client();
    assert!(!service.enable_gzip_compression());
    service.set_enable_gzip_compression(true).unwrap();
    assert!(service.enable_gzip_compression());

    service.enable_retries(4, Duration::from_secs(30));
    let retry = service.retry_config().unwrap();
    assert_eq!(retry.max_retries, 4);
    assert_eq!(retry.max_interval, Duration::from_secs(30));
    service.disable_retries();
    assert!(service.retry_config().is_none());

    service.disable_ssl_verification().unwrap();
}

#[test_case("us-south", "https://us.schematics.cloud.ibm.com")]
#[test_case("us-east", "https://us.schematics.cloud.ibm.com")]
#[test_case("eu-gb", "https://eu.schematics.cloud.ibm.com")]
#[test_case("eu-de", "https://eu.schematics.cloud.ibm.com")]
fn test_service_url_for_region(region: &str, expected: &str) {
    assert_eq!(SchematicsV1::service_url_for_region(region).unwrap(), expected);
}

#[test]
fn test_service_url_for_unknown_region() {
    let err = SchematicsV1::service_url_for_region("INVALID_REGION").unwrap_err();
    assert!(err.to_string().contains("INVALID_REGION"));
}

#[test]
fn test_from_external_config() {
    let config = ExternalConfig::from_vars(
        "schematics",
        [
            ("SCHEMATICS_URL", "https://schematicsv1/api"),
            ("SCHEMATICS_AUTH_TYPE", "noauth"),
            ("SCHEMATICS_ENABLE_GZIP", "true"),
            ("SCHEMATICS_ENABLE_RETRIES", "true"),
            ("SCHEMATICS_MAX_RETRIES", "2"),
        ],
    )
    .unwrap();

    let service = SchematicsV1::from_external_config(&config).unwrap();
    assert_eq!(service.service_url(), "https://schematicsv1/api");
    assert_eq!(
        service.base_service().authenticator().auth_type(),
        AuthType::NoAuth
    );
    assert!(service.enable_gzip_compression());
    assert_eq!(service.retry_config().unwrap().max_retries, 2);
}

#[test]
fn test_from_external_config_unknown_auth_type() {
    let config = ExternalConfig::from_vars(
        "schematics",
        [
            ("SCHEMATICS_URL", "https://schematicsv1/api"),
            ("SCHEMATICS_AUTH_TYPE", "someOtherAuth"),
        ],
    )
    .unwrap();

    let err = SchematicsV1::from_external_config(&config).unwrap_err();
    assert!(matches!(err, Error::UnsupportedAuthType { .. }));
}

#[test]
fn test_explicit_options_override_external_config() {
    let config = ExternalConfig::from_vars(
        "schematics",
        [
            ("SCHEMATICS_URL", "https://schematicsv1/api"),
            ("SCHEMATICS_AUTH_TYPE", "someOtherAuth"),
        ],
    )
    .unwrap();

    let service = SchematicsV1::with_external_config(
        SchematicsV1Options {
            url: Some("https://override/api".to_string()),
            authenticator: Some(Authenticator::no_auth()),
            ..Default::default()
        },
        &config,
    )
    .unwrap();
    assert_eq!(service.service_url(), "https://override/api");
}

#[test]
fn test_require() {
    assert!(require("w_id", "ws-1").is_ok());
    assert_missing(require("w_id", "").unwrap_err(), "w_id");
}

#[test]
fn test_option_validation() {
    assert_missing(GetWorkspaceOptions::new("").validate().unwrap_err(), "w_id");
    assert_missing(
        DeleteWorkspaceOptions::new("ws-1", "").validate().unwrap_err(),
        "refresh_token",
    );
    assert_missing(
        UploadTemplateTarOptions::new("ws-1", "").validate().unwrap_err(),
        "t_id",
    );
    assert_missing(
        WorkspaceActivityOptions::new("ws-1", "").validate().unwrap_err(),
        "activity_id",
    );
    assert_missing(
        GetDiscoveredKmsInstancesOptions::new("byok", "")
            .validate()
            .unwrap_err(),
        "location",
    );
    assert_missing(
        CreateWorkspaceDeletionJobOptions::new("").validate().unwrap_err(),
        "refresh_token",
    );
    assert_missing(
        UpdateJobOptions::new("job-1", "", Job::default())
            .validate()
            .unwrap_err(),
        "refresh_token",
    );
    assert_missing(
        ProcessTemplateMetaDataOptions::new("", ExternalSource::new("git_hub"))
            .validate()
            .unwrap_err(),
        "template_type",
    );

    assert!(GetKmsSettingsOptions::new("US").validate().is_ok());
    assert!(DeleteActionOptions::new("act-1").force(true).validate().is_ok());
}

#[tokio::test]
async fn test_validation_happens_before_io() {
    // Nothing listens on this URL; validation must fail first.
    let service = client();
    let err = service
        .get_workspace_with_context(&Context::background(), &GetWorkspaceOptions::new(""))
        .await
        .unwrap_err();
    assert_missing(err, "w_id");

    let err = service
        .delete_shared_dataset(&DeleteSharedDatasetOptions::new(""))
        .await
        .unwrap_err();
    assert_missing(err, "sd_id");
}

#[test]
fn test_deletion_job_body_fields() {
    let options = CreateWorkspaceDeletionJobOptions::new("token")
        .new_delete_workspaces(true)
        .new_workspaces(vec!["ws-1".to_string()])
        .destroy_resources("true");

    let body = serde_json::to_value(&options).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"delete_workspaces": true, "workspaces": ["ws-1"]})
    );
}

#[test]
fn test_kms_settings_options_carry_body() {
    let settings = KmsSettings {
        location: Some("US".to_string()),
        ..Default::default()
    };
    let options = ReplaceKmsSettingsOptions::new(settings.clone());
    assert_eq!(options.settings, settings);
}
