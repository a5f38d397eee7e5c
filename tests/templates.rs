//! Template inputs, outputs, state and log operations against a mock server

#[macro_use]
mod common;

use common::client;
use pretty_assertions::assert_eq;
use schematics_sdk::models::WorkspaceVariableRequest;
use schematics_sdk::service::{
    GetAllWorkspaceInputsOptions, GetTemplateActivityLogOptions, GetTemplateLogsOptions,
    GetWorkspaceActivityLogsOptions, GetWorkspaceInputMetadataOptions, GetWorkspaceInputsOptions,
    GetWorkspaceLogUrlsOptions, GetWorkspaceOutputsOptions, GetWorkspaceResourcesOptions,
    GetWorkspaceStateOptions, GetWorkspaceTemplateStateOptions, LogFilter,
    ReplaceWorkspaceInputsOptions,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_get(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_workspace_inputs() {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/v1/workspaces/ws-1/template_data/t-1/values",
        json!({"values_metadata": [{"name": "region", "type": "string"}]}),
    )
    .await;
    mock_get(
        &server,
        "/v1/workspaces/ws-1/templates/values",
        json!({
            "runtime_data": [{"id": "t-1", "engine_name": "terraform"}],
            "template_data": [{"id": "t-1", "folder": "."}]
        }),
    )
    .await;
    mock_get(
        &server,
        "/v1/workspaces/ws-1/template_data/t-1/values_metadata",
        json!([{"name": "region", "default": "us-south"}]),
    )
    .await;

    let service = client(&server.uri());

    let inputs = service
        .get_workspace_inputs(&GetWorkspaceInputsOptions::new("ws-1", "t-1"))
        .await
        .unwrap();
    assert_eq!(inputs.result().values_metadata.as_ref().unwrap().len(), 1);

    let all = service
        .get_all_workspace_inputs(&GetAllWorkspaceInputsOptions::new("ws-1"))
        .await
        .unwrap();
    let runtime = &all.result().runtime_data.as_ref().unwrap()[0];
    assert_eq!(runtime.engine_name.as_deref(), Some("terraform"));

    let metadata = service
        .get_workspace_input_metadata(&GetWorkspaceInputMetadataOptions::new("ws-1", "t-1"))
        .await
        .unwrap();
    assert_eq!(metadata.result()[0]["default"], "us-south");
}

#[tokio::test]
async fn test_replace_workspace_inputs() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/workspaces/ws-1/template_data/t-1/values"))
        .and(body_json(json!({
            "values": "region = \"eu-de\"",
            "variablestore": [{"name": "count", "value": "2"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": "region = \"eu-de\"",
            "variablestore": [{"name": "count", "value": "2", "secure": false}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = client(&server.uri());
    let options = ReplaceWorkspaceInputsOptions::new("ws-1", "t-1")
        .values("region = \"eu-de\"")
        .variablestore(vec![WorkspaceVariableRequest::new("count", "2")]);
    let response = service.replace_workspace_inputs(&options).await.unwrap();

    let variables = response.result().variablestore.as_ref().unwrap();
    assert_eq!(variables[0].secure, Some(false));
}

#[tokio::test]
async fn test_outputs_resources_and_state() {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/v1/workspaces/ws-1/output_values",
        json!([{"id": "t-1", "output_values": [{"ip": {"value": "10.0.0.1"}}]}]),
    )
    .await;
    mock_get(
        &server,
        "/v1/workspaces/ws-1/resources",
        json!([{"id": "t-1", "resources_count": 4, "template_type": "terraform_v0.12"}]),
    )
    .await;
    mock_get(
        &server,
        "/v1/workspaces/ws-1/state_stores",
        json!({"runtime_data": [{"id": "t-1", "state_store_url": "https://state"}]}),
    )
    .await;
    mock_get(
        &server,
        "/v1/workspaces/ws-1/runtime_data/t-1/state_store",
        json!({"version": 3, "terraform_version": "0.12.31", "serial": 7, "lineage": "abc"}),
    )
    .await;

    let service = client(&server.uri());

    let outputs = service
        .get_workspace_outputs(&GetWorkspaceOutputsOptions::new("ws-1"))
        .await
        .unwrap();
    let values = outputs.result()[0].output_values.as_ref().unwrap();
    assert_eq!(values[0]["ip"]["value"], "10.0.0.1");

    let resources = service
        .get_workspace_resources(&GetWorkspaceResourcesOptions::new("ws-1"))
        .await
        .unwrap();
    assert_eq!(resources.result()[0].resources_count, Some(4));

    let state = service
        .get_workspace_state(&GetWorkspaceStateOptions::new("ws-1"))
        .await
        .unwrap();
    let stores = state.result().runtime_data.as_ref().unwrap();
    assert_eq!(stores[0].state_store_url.as_deref(), Some("https://state"));

    let template_state = service
        .get_workspace_template_state(&GetWorkspaceTemplateStateOptions::new("ws-1", "t-1"))
        .await
        .unwrap();
    assert_eq!(template_state.result().version, Some(3.0));
    assert_eq!(template_state.result().lineage.as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_log_urls() {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/v1/workspaces/ws-1/actions/act-1/logs",
        json!({
            "action_id": "act-1",
            "name": "APPLY",
            "templates": [{"template_id": "t-1", "log_url": "https://logs/1"}]
        }),
    )
    .await;
    mock_get(
        &server,
        "/v1/workspaces/ws-1/log_stores",
        json!({"runtime_data": [{"id": "t-1", "log_store_url": "https://logs"}]}),
    )
    .await;

    let service = client(&server.uri());

    let logs = service
        .get_workspace_activity_logs(&GetWorkspaceActivityLogsOptions::new("ws-1", "act-1"))
        .await
        .unwrap();
    let templates = logs.result().templates.as_ref().unwrap();
    assert_eq!(templates[0].log_url.as_deref(), Some("https://logs/1"));

    let urls = service
        .get_workspace_log_urls(&GetWorkspaceLogUrlsOptions::new("ws-1"))
        .await
        .unwrap();
    let stores = urls.result().runtime_data.as_ref().unwrap();
    assert_eq!(stores[0].log_store_url.as_deref(), Some("https://logs"));
}

#[tokio::test]
async fn test_template_logs_with_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/workspaces/ws-1/runtime_data/t-1/log_store"))
        .and(query_param("log_tf_cmd", "true"))
        .and(query_param("log_tf_ansible", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("terraform apply output")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(
            "/v1/workspaces/ws-1/runtime_data/t-1/log_store/actions/act-1",
        ))
        .and(query_param("log_tf_prefix", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("activity log")))
        .expect(1)
        .mount(&server)
        .await;

    let service = client(&server.uri());

    let filter = LogFilter {
        log_tf_cmd: Some(true),
        log_tf_ansible: Some(false),
        ..Default::default()
    };
    let logs = service
        .get_template_logs(&GetTemplateLogsOptions::new("ws-1", "t-1").filter(filter))
        .await
        .unwrap();
    assert_eq!(logs.result(), "terraform apply output");

    let filter = LogFilter {
        log_tf_prefix: Some(true),
        ..Default::default()
    };
    let log = service
        .get_template_activity_log(
            &GetTemplateActivityLogOptions::new("ws-1", "t-1", "act-1").filter(filter),
        )
        .await
        .unwrap();
    assert_eq!(log.result(), "activity log");
}

failure_modes! {
    get_workspace_inputs_with_context(GetWorkspaceInputsOptions::new("ws-1", "t-1")):
        GET "/v1/workspaces/ws-1/template_data/t-1/values" [validation, decode];
    replace_workspace_inputs_with_context(ReplaceWorkspaceInputsOptions::new("ws-1", "t-1")):
        PUT "/v1/workspaces/ws-1/template_data/t-1/values" [validation, decode];
    get_all_workspace_inputs_with_context(GetAllWorkspaceInputsOptions::new("ws-1")):
        GET "/v1/workspaces/ws-1/templates/values" [validation, decode];
    get_workspace_input_metadata_with_context(GetWorkspaceInputMetadataOptions::new("ws-1", "t-1")):
        GET "/v1/workspaces/ws-1/template_data/t-1/values_metadata" [validation, decode];
    get_workspace_outputs_with_context(GetWorkspaceOutputsOptions::new("ws-1")):
        GET "/v1/workspaces/ws-1/output_values" [validation, decode];
    get_workspace_resources_with_context(GetWorkspaceResourcesOptions::new("ws-1")):
        GET "/v1/workspaces/ws-1/resources" [validation, decode];
    get_workspace_state_with_context(GetWorkspaceStateOptions::new("ws-1")):
        GET "/v1/workspaces/ws-1/state_stores" [validation, decode];
    get_workspace_template_state_with_context(GetWorkspaceTemplateStateOptions::new("ws-1", "t-1")):
        GET "/v1/workspaces/ws-1/runtime_data/t-1/state_store" [validation, decode];
    get_workspace_activity_logs_with_context(GetWorkspaceActivityLogsOptions::new("ws-1", "act-1")):
        GET "/v1/workspaces/ws-1/actions/act-1/logs" [validation, decode];
    get_workspace_log_urls_with_context(GetWorkspaceLogUrlsOptions::new("ws-1")):
        GET "/v1/workspaces/ws-1/log_stores" [validation, decode];
    get_template_logs_with_context(GetTemplateLogsOptions::new("ws-1", "t-1")):
        GET "/v1/workspaces/ws-1/runtime_data/t-1/log_store" [validation, decode];
    get_template_activity_log_with_context(GetTemplateActivityLogOptions::new("ws-1", "t-1", "act-1")):
        GET "/v1/workspaces/ws-1/runtime_data/t-1/log_store/actions/act-1" [validation, decode];
}
