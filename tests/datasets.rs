//! Shared dataset operations against a mock server

#[macro_use]
mod common;

use common::client;
use pretty_assertions::assert_eq;
use schematics_sdk::models::SharedDatasetData;
use schematics_sdk::service::{
    CreateSharedDatasetOptions, DeleteSharedDatasetOptions, GetSharedDatasetOptions,
    ListSharedDatasetsOptions, ReplaceSharedDatasetOptions, SharedDataset,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dataset_body() -> serde_json::Value {
    json!({
        "shared_dataset_id": "sd-1",
        "shared_dataset_name": "common-vars",
        "shared_dataset_data": [{"var_name": "region", "default_value": "us-south"}],
        "effected_workspaces": ["ws-1"],
        "state": "ACTIVE"
    })
}

#[tokio::test]
async fn test_list_shared_datasets() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/shared_datasets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "shared_datasets": [dataset_body()]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = client(&server.uri());
    let response = service
        .list_shared_datasets(&ListSharedDatasetsOptions::new())
        .await
        .unwrap();

    assert_eq!(response.result().count, Some(1));
    let datasets = response.result().shared_datasets.as_ref().unwrap();
    assert_eq!(datasets[0].state.as_deref(), Some("ACTIVE"));
}

#[tokio::test]
async fn test_create_and_replace_shared_dataset() {
    let server = MockServer::start().await;

    let body = json!({
        "auto_propagate_change": true,
        "shared_dataset_name": "common-vars",
        "shared_dataset_data": [{"var_name": "region", "default_value": "us-south"}]
    });

    Mock::given(method("POST"))
        .and(path("/v2/shared_datasets"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(201).set_body_json(dataset_body()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v2/shared_datasets/sd-1"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(dataset_body()))
        .expect(1)
        .mount(&server)
        .await;

    let dataset = SharedDataset {
        auto_propagate_change: Some(true),
        shared_dataset_name: Some("common-vars".to_string()),
        shared_dataset_data: Some(vec![SharedDatasetData {
            var_name: Some("region".to_string()),
            default_value: Some("us-south".to_string()),
            ..Default::default()
        }]),
        ..Default::default()
    };

    let service = client(&server.uri());
    let created = service
        .create_shared_dataset(&CreateSharedDatasetOptions::new(dataset.clone()))
        .await
        .unwrap();
    assert_eq!(created.result().shared_dataset_id.as_deref(), Some("sd-1"));

    service
        .replace_shared_dataset(&ReplaceSharedDatasetOptions::new("sd-1", dataset))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_and_delete_shared_dataset() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/shared_datasets/sd-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dataset_body()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v2/shared_datasets/sd-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dataset_body()))
        .expect(1)
        .mount(&server)
        .await;

    let service = client(&server.uri());
    let fetched = service
        .get_shared_dataset(&GetSharedDatasetOptions::new("sd-1"))
        .await
        .unwrap();
    let data = fetched.result().shared_dataset_data.as_ref().unwrap();
    assert_eq!(data[0].var_name.as_deref(), Some("region"));

    let deleted = service
        .delete_shared_dataset(&DeleteSharedDatasetOptions::new("sd-1"))
        .await
        .unwrap();
    assert_eq!(deleted.result().effected_workspaces.as_ref().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_shared_dataset_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/shared_datasets/sd-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let service = client(&server.uri());
    let response = service
        .delete_shared_dataset(&DeleteSharedDatasetOptions::new("sd-1"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 204);
    assert_eq!(response.result().shared_dataset_id, None);
}

failure_modes! {
    list_shared_datasets_with_context(ListSharedDatasetsOptions::new()):
        GET "/v2/shared_datasets" [decode];
    create_shared_dataset_with_context(CreateSharedDatasetOptions::new(SharedDataset::default())):
        POST "/v2/shared_datasets" [decode];
    get_shared_dataset_with_context(GetSharedDatasetOptions::new("sd-1")):
        GET "/v2/shared_datasets/sd-1" [validation, decode];
    replace_shared_dataset_with_context(ReplaceSharedDatasetOptions::new("sd-1", SharedDataset::default())):
        PUT "/v2/shared_datasets/sd-1" [validation, decode];
    delete_shared_dataset_with_context(DeleteSharedDatasetOptions::new("sd-1")):
        DELETE "/v2/shared_datasets/sd-1" [validation, decode];
}
