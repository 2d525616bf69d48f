//! Order reminders job against a stubbed Query/Mutation Service.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crm_jobs::jobs::reminders::{self, ReminderError};
use crm_jobs::{CrmClient, JobLog};

#[tokio::test]
async fn each_recent_order_gets_a_reminder_line() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "ordersLastWeek": [
                    {
                        "id": "12",
                        "orderDate": "2026-08-27T09:30:00+00:00",
                        "customer": { "email": "alice@example.com" }
                    },
                    {
                        "id": "15",
                        "orderDate": "2026-08-28T14:00:00+00:00",
                        "customer": { "email": "bob@example.com" }
                    }
                ]
            }
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let log = JobLog::in_dir(dir.path(), reminders::LOG_FILE);
    let client = CrmClient::new(format!("{}/graphql", server.uri()));

    let count = reminders::run(&client, &log).await.expect("job run");
    assert_eq!(count, 2);

    let contents = std::fs::read_to_string(log.path()).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("- Order reminder: Order ID 12, Customer: alice@example.com"));
    assert!(lines[1].ends_with("- Order reminder: Order ID 15, Customer: bob@example.com"));
}

#[tokio::test]
async fn an_empty_week_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "ordersLastWeek": [] }
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let log = JobLog::in_dir(dir.path(), reminders::LOG_FILE);
    let client = CrmClient::new(format!("{}/graphql", server.uri()));

    let count = reminders::run(&client, &log).await.expect("job run");
    assert_eq!(count, 0);

    // No reminder lines and no error line; the file was never created.
    assert!(!log.path().exists());
}

#[tokio::test]
async fn failures_are_logged_and_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": null,
            "errors": [ { "message": "orders table unavailable" } ]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let log = JobLog::in_dir(dir.path(), reminders::LOG_FILE);
    let client = CrmClient::new(format!("{}/graphql", server.uri()));

    let err = reminders::run(&client, &log).await.expect_err("should surface");
    assert!(matches!(err, ReminderError::Crm(_)));

    let contents = std::fs::read_to_string(log.path()).expect("read log");
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("- Error processing order reminders:"));
    assert!(contents.contains("orders table unavailable"));
}
