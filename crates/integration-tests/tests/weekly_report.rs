//! Weekly report job against a stubbed Query/Mutation Service.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crm_jobs::jobs::report::{self, ReportOutcome};
use crm_jobs::{CrmClient, JobLog};

async fn stub_stats(body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn totals_become_a_report_line_and_summary() {
    let server = stub_stats(serde_json::json!({
        "data": {
            "totalCustomers": 5,
            "totalOrders": 10,
            "totalRevenue": 1234.5
        }
    }))
    .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let log = JobLog::in_dir(dir.path(), report::LOG_FILE);
    let client = CrmClient::new(format!("{}/graphql", server.uri()));

    let outcome = report::run(&client, &log).await.expect("job run");
    assert_eq!(
        outcome.to_string(),
        "Report generated: 5 customers, 10 orders, 1234.5 revenue"
    );

    let contents = std::fs::read_to_string(log.path()).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("- Report: 5 customers, 10 orders, 1234.5 revenue"));
}

#[tokio::test]
async fn no_orders_reports_zero_revenue() {
    let server = stub_stats(serde_json::json!({
        "data": {
            "totalCustomers": 3,
            "totalOrders": 0,
            "totalRevenue": 0.0
        }
    }))
    .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let log = JobLog::in_dir(dir.path(), report::LOG_FILE);
    let client = CrmClient::new(format!("{}/graphql", server.uri()));

    let outcome = report::run(&client, &log).await.expect("job run");
    assert_eq!(
        outcome,
        ReportOutcome::Generated {
            customers: 3,
            orders: 0,
            revenue: 0.0
        }
    );
}

#[tokio::test]
async fn service_failure_becomes_a_failed_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let log = JobLog::in_dir(dir.path(), report::LOG_FILE);
    let client = CrmClient::new(format!("{}/graphql", server.uri()));

    let outcome = report::run(&client, &log).await.expect("job run");
    let ReportOutcome::Failed(msg) = outcome else {
        panic!("expected a failed outcome");
    };
    assert!(msg.starts_with("Error generating CRM report:"), "got: {msg}");
    assert!(msg.contains("502"));

    let contents = std::fs::read_to_string(log.path()).expect("read log");
    assert!(contents.contains("- Error: Error generating CRM report:"));
}
