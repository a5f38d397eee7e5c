//! Job operations against a mock server

#[macro_use]
mod common;

use common::{client, client_with_retries};
use pretty_assertions::assert_eq;
use schematics_sdk::models::Job;
use schematics_sdk::service::{
    CreateJobOptions, DeleteJobOptions, GetJobOptions, ListJobLogsOptions, ListJobStatesOptions,
    ListJobsOptions, UpdateJobOptions,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn job_body() -> serde_json::Value {
    json!({
        "id": "job-1",
        "command_object": "action",
        "command_object_id": "a-1",
        "command_name": "ansible_playbook_run",
        "submitted_at": "2021-05-01T08:00:00Z",
        "status": {
            "action_job_status": {"action_name": "demo", "status_code": "job_in_progress"}
        },
        "log_summary": {
            "job_id": "job-1",
            "elapsed_time": 4.0,
            "action_job": {"task_count": 3, "recap": {"ok": 3, "failed": 0}}
        }
    })
}

#[tokio::test]
async fn test_list_jobs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/jobs"))
        .and(query_param("resource", "actions"))
        .and(query_param("action_id", "a-1"))
        .and(query_param("list", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 1,
            "jobs": [{"id": "job-1", "command_name": "ansible_playbook_run"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = client(&server.uri());
    let options = ListJobsOptions::new()
        .resource("actions")
        .action_id("a-1")
        .list("all");
    let response = service.list_jobs(&options).await.unwrap();

    let jobs = response.result().jobs.as_ref().unwrap();
    assert_eq!(jobs[0].command_name.as_deref(), Some("ansible_playbook_run"));
}

#[tokio::test]
async fn test_create_job() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/jobs"))
        .and(header("refresh_token", "refresh"))
        .and(body_json(json!({
            "command_object": "action",
            "command_object_id": "a-1",
            "command_name": "ansible_playbook_run"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(job_body()))
        .expect(1)
        .mount(&server)
        .await;

    let job = Job {
        command_object: Some("action".to_string()),
        command_object_id: Some("a-1".to_string()),
        command_name: Some("ansible_playbook_run".to_string()),
        ..Default::default()
    };

    let service = client(&server.uri());
    let response = service
        .create_job(&CreateJobOptions::new("refresh", job))
        .await
        .unwrap();

    let created = response.result();
    let status = created
        .status
        .as_ref()
        .and_then(|s| s.action_job_status.as_ref())
        .unwrap();
    assert_eq!(status.status_code.as_deref(), Some("job_in_progress"));
    let recap = created
        .log_summary
        .as_ref()
        .and_then(|s| s.action_job.as_ref())
        .and_then(|a| a.recap.as_ref())
        .unwrap();
    assert_eq!(recap.ok, Some(3.0));
}

#[tokio::test]
async fn test_get_update_delete_job() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/jobs/job-1"))
        .and(query_param("profile", "detailed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v2/jobs/job-1"))
        .and(header("refresh_token", "refresh"))
        .respond_with(ResponseTemplate::new(202).set_body_json(job_body()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v2/jobs/job-1"))
        .and(header("refresh_token", "refresh"))
        .and(header("force", "true"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let service = client(&server.uri());

    let job = service
        .get_job(&GetJobOptions::new("job-1").profile("detailed"))
        .await
        .unwrap();
    assert_eq!(job.result().id.as_deref(), Some("job-1"));

    let updated = service
        .update_job(&UpdateJobOptions::new("job-1", "refresh", Job::default()))
        .await
        .unwrap();
    assert_eq!(updated.status_code, 202);

    let deleted = service
        .delete_job(&DeleteJobOptions::new("job-1", "refresh").force(true))
        .await
        .unwrap();
    assert_eq!(deleted.status_code, 204);
}

#[tokio::test]
async fn test_job_logs_and_states() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/jobs/job-1/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_id": "job-1",
            "format": "text",
            "details": "PLAY RECAP"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/jobs/job-1/states"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_id": "job-1",
            "summary": [{"name": "hosts", "type": "number", "value": "3"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = client(&server.uri());

    let logs = service
        .list_job_logs(&ListJobLogsOptions::new("job-1"))
        .await
        .unwrap();
    assert_eq!(logs.result().details.as_deref(), Some("PLAY RECAP"));

    let states = service
        .list_job_states(&ListJobStatesOptions::new("job-1"))
        .await
        .unwrap();
    let summary = states.result().summary.as_ref().unwrap();
    assert_eq!(summary[0].type_.as_deref(), Some("number"));
}

#[tokio::test]
async fn test_get_job_retries_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/jobs/job-1"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/jobs/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body()))
        .expect(1)
        .mount(&server)
        .await;

    let service = client_with_retries(&server.uri());
    let response = service.get_job(&GetJobOptions::new("job-1")).await.unwrap();
    assert_eq!(response.status_code, 200);
}

failure_modes! {
    list_jobs_with_context(ListJobsOptions::new()): GET "/v2/jobs" [decode];
    create_job_with_context(CreateJobOptions::new("refresh", Job::default())):
        POST "/v2/jobs" [validation, decode];
    get_job_with_context(GetJobOptions::new("job-1")): GET "/v2/jobs/job-1" [validation, decode];
    update_job_with_context(UpdateJobOptions::new("job-1", "refresh", Job::default())):
        PUT "/v2/jobs/job-1" [validation, decode];
    delete_job_with_context(DeleteJobOptions::new("job-1", "refresh")):
        DELETE "/v2/jobs/job-1" [validation];
    list_job_logs_with_context(ListJobLogsOptions::new("job-1")):
        GET "/v2/jobs/job-1/logs" [validation, decode];
    list_job_states_with_context(ListJobStatesOptions::new("job-1")):
        GET "/v2/jobs/job-1/states" [validation, decode];
}
