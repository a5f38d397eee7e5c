//! Location, resource group, version and template metadata operations

#[macro_use]
mod common;

use common::client;
use pretty_assertions::assert_eq;
use schematics_sdk::models::{ExternalSource, ExternalSourceGit};
use schematics_sdk::service::{
    GetSchematicsVersionOptions, ListLocationsOptions, ListResourceGroupOptions,
    ListSchematicsLocationOptions, ProcessTemplateMetaDataOptions,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_locations() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "us-south", "name": "Dallas", "geography": "North America"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "locations": [{"region": "us-south", "paired_region": ["us-east"], "restricted": false}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = client(&server.uri());

    let v1 = service
        .list_schematics_location(&ListSchematicsLocationOptions::new())
        .await
        .unwrap();
    assert_eq!(v1.result()[0].name.as_deref(), Some("Dallas"));

    let v2 = service
        .list_locations(&ListLocationsOptions::new())
        .await
        .unwrap();
    let locations = v2.result().locations.as_ref().unwrap();
    assert_eq!(locations[0].paired_region.as_ref().unwrap()[0], "us-east");
}

#[tokio::test]
async fn test_resource_groups_and_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/resource_groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Default", "default": true, "resource_group_id": "rg-1"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "buildno": "1234",
            "terraform_version": "0.12.31",
            "supported_template_types": {"terraform": ["v0.12", "v0.13"]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = client(&server.uri());

    let groups = service
        .list_resource_group(&ListResourceGroupOptions::new())
        .await
        .unwrap();
    assert_eq!(groups.result()[0].default, Some(true));

    let version = service
        .get_schematics_version(&GetSchematicsVersionOptions::new())
        .await
        .unwrap();
    assert_eq!(version.result().buildno.as_deref(), Some("1234"));
    assert_eq!(
        version.result().supported_template_types.as_ref().unwrap()["terraform"][1],
        "v0.13"
    );
}

#[tokio::test]
async fn test_process_template_meta_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/template_metadata_processor"))
        .and(header("X-Github-token", "gh-token"))
        .and(body_json(json!({
            "template_type": "ansible",
            "source": {
                "source_type": "git_hub",
                "git": {"git_repo_url": "https://github.com/Cloud-Schematics/demo"}
            },
            "region": "us-south"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "ansible",
            "variables": [{"name": "count", "value": "1", "metadata": {"type": "integer"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let source = ExternalSource {
        git: Some(ExternalSourceGit {
            git_repo_url: Some("https://github.com/Cloud-Schematics/demo".to_string()),
            ..Default::default()
        }),
        ..ExternalSource::new("git_hub")
    };
    let options = ProcessTemplateMetaDataOptions::new("ansible", source)
        .region("us-south")
        .x_github_token("gh-token");

    let service = client(&server.uri());
    let response = service.process_template_meta_data(&options).await.unwrap();

    assert_eq!(response.result().type_.as_deref(), Some("ansible"));
    let variables = response.result().variables.as_ref().unwrap();
    let metadata = variables[0].metadata.as_ref().unwrap();
    assert_eq!(metadata.type_.as_deref(), Some("integer"));
}

failure_modes! {
    list_schematics_location_with_context(ListSchematicsLocationOptions::new()):
        GET "/v1/locations" [decode];
    list_locations_with_context(ListLocationsOptions::new()): GET "/v2/locations" [decode];
    list_resource_group_with_context(ListResourceGroupOptions::new()):
        GET "/v1/resource_groups" [decode];
    get_schematics_version_with_context(GetSchematicsVersionOptions::new()):
        GET "/v1/version" [decode];
    process_template_meta_data_with_context(
        ProcessTemplateMetaDataOptions::new("terraform", ExternalSource::new("git_hub"))
    ): POST "/v2/template_metadata_processor" [validation, decode];
}
