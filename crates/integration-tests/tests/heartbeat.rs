//! Heartbeat job against a stubbed Query/Mutation Service.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crm_jobs::jobs::heartbeat::{self, ProbeStatus};
use crm_jobs::{CrmClient, JobLog};

#[tokio::test]
async fn responsive_endpoint_gets_alive_and_confirmation_lines() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "hello": "Hello from GraphQL CRM!" }
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let log = JobLog::in_dir(dir.path(), heartbeat::LOG_FILE);
    let client = CrmClient::new(format!("{}/graphql", server.uri()));

    let status = heartbeat::run(&client, &log).await.expect("heartbeat run");
    assert_eq!(status, ProbeStatus::Responsive);

    let contents = std::fs::read_to_string(log.path()).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("CRM is alive"), "got: {}", lines[0]);
    assert!(
        lines[1].ends_with("GraphQL endpoint responsive"),
        "got: {}",
        lines[1]
    );
}

#[tokio::test]
async fn unreachable_endpoint_still_records_heartbeat() {
    // Nothing listens on port 9; the probe fails fast with a transport error.
    let dir = tempfile::tempdir().expect("tempdir");
    let log = JobLog::in_dir(dir.path(), heartbeat::LOG_FILE);
    let client = CrmClient::new("http://127.0.0.1:9/graphql");

    let status = heartbeat::run(&client, &log).await.expect("heartbeat run");
    assert!(matches!(status, ProbeStatus::Failed(_)));

    let contents = std::fs::read_to_string(log.path()).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("CRM is alive"));
    assert!(
        lines[1].contains("GraphQL endpoint check failed:"),
        "got: {}",
        lines[1]
    );
}

#[tokio::test]
async fn server_error_is_logged_as_probe_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let log = JobLog::in_dir(dir.path(), heartbeat::LOG_FILE);
    let client = CrmClient::new(format!("{}/graphql", server.uri()));

    let status = heartbeat::run(&client, &log).await.expect("heartbeat run");
    let ProbeStatus::Failed(reason) = status else {
        panic!("expected a failed probe");
    };
    assert!(reason.contains("500"), "got: {reason}");

    let contents = std::fs::read_to_string(log.path()).expect("read log");
    assert!(contents.contains("GraphQL endpoint check failed:"));
}

#[tokio::test]
async fn both_lines_share_one_timestamp() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "hello": "hi" }
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let log = JobLog::in_dir(dir.path(), heartbeat::LOG_FILE);
    let client = CrmClient::new(format!("{}/graphql", server.uri()));

    heartbeat::run(&client, &log).await.expect("heartbeat run");

    let contents = std::fs::read_to_string(log.path()).expect("read log");
    let stamps: Vec<&str> = contents
        .lines()
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(stamps.len(), 2);
    assert_eq!(stamps[0], stamps[1]);
    // DD/MM/YYYY-HH:MM:SS
    assert_eq!(stamps[0].len(), 19);
}
