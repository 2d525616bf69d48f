//! Low-stock update job against a stubbed Query/Mutation Service.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crm_core::ProductId;
use crm_jobs::jobs::low_stock::{self, LowStockOutcome};
use crm_jobs::{CrmClient, JobLog};

async fn stub_mutation(body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

fn setup(server: &MockServer) -> (tempfile::TempDir, JobLog, CrmClient) {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = JobLog::in_dir(dir.path(), low_stock::LOG_FILE);
    let client = CrmClient::new(format!("{}/graphql", server.uri()));
    (dir, log, client)
}

#[tokio::test]
async fn restocked_products_get_one_line_each() {
    let server = stub_mutation(serde_json::json!({
        "data": {
            "updateLowStockProducts": {
                "success": true,
                "message": "Updated 2 products",
                "updatedProducts": [
                    { "id": "1", "name": "Laptop", "price": "999.99", "stock": 15 },
                    { "id": "4", "name": "Monitor", "price": "299.99", "stock": 13 }
                ]
            }
        }
    }))
    .await;
    let (_dir, log, client) = setup(&server);

    let outcome = low_stock::run(&client, &log).await.expect("job run");
    let LowStockOutcome::Updated(products) = outcome else {
        panic!("expected an updated batch");
    };
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId::new(1));
    assert_eq!(products[0].stock, 15);

    let contents = std::fs::read_to_string(log.path()).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("- Low stock update executed"));
    assert!(lines[1].ends_with("- Updated product: Laptop, new stock: 15"));
    assert!(lines[2].ends_with("- Updated product: Monitor, new stock: 13"));
}

#[tokio::test]
async fn empty_batch_is_recorded_explicitly() {
    let server = stub_mutation(serde_json::json!({
        "data": {
            "updateLowStockProducts": {
                "success": true,
                "message": "Updated 0 products",
                "updatedProducts": []
            }
        }
    }))
    .await;
    let (_dir, log, client) = setup(&server);

    let outcome = low_stock::run(&client, &log).await.expect("job run");
    assert_eq!(outcome, LowStockOutcome::NoneFound);

    let contents = std::fs::read_to_string(log.path()).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("- Low stock update executed"));
    assert!(lines[1].ends_with("- No low stock products found to update"));
}

#[tokio::test]
async fn rejected_mutation_is_a_failed_outcome_not_an_error() {
    let server = stub_mutation(serde_json::json!({
        "data": {
            "updateLowStockProducts": {
                "success": false,
                "message": "inventory is locked",
                "updatedProducts": []
            }
        }
    }))
    .await;
    let (_dir, log, client) = setup(&server);

    let outcome = low_stock::run(&client, &log).await.expect("job run");
    assert_eq!(
        outcome,
        LowStockOutcome::Failed("inventory is locked".to_owned())
    );

    let contents = std::fs::read_to_string(log.path()).expect("read log");
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("- Mutation failed: inventory is locked"));
}

#[tokio::test]
async fn server_error_is_swallowed_into_a_log_line() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let (_dir, log, client) = setup(&server);

    let outcome = low_stock::run(&client, &log).await.expect("job run");
    let LowStockOutcome::Failed(reason) = outcome else {
        panic!("expected a failed outcome");
    };
    assert!(reason.contains("503"), "got: {reason}");

    let contents = std::fs::read_to_string(log.path()).expect("read log");
    assert!(contents.contains("- Error updating low stock:"));
}
