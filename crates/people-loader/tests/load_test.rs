//! Integration tests for [`people_loader::load`] with a mocked bulk transport.
//!
//! Checks the encoded payload (line count, pairing, document count), the batch split,
//! and the console report for success and failure responses.

mod common;

use bulk_client::INDEX_ACTION_LINE;
use common::{MockTransport, Reply};
use people_loader::{load, load_documents, report, LoadConfig, LoadOutcome};
use person_generator::PersonRecord;
use serde_json::Value;

fn config(count: usize, batch_size: Option<usize>) -> LoadConfig {
    LoadConfig {
        count,
        batch_size,
        ..LoadConfig::default()
    }
}

fn render(outcome: &LoadOutcome) -> String {
    let mut out = Vec::new();
    report(outcome, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// **Test: Default run sends one body with 2000 lines.**
///
/// **Expected:** One request; 1000 action lines alternating with 1000 person documents, each
/// line standalone JSON with all four fields as non-empty strings.
#[tokio::test]
async fn test_default_load_sends_single_ndjson_body() {
    let transport = MockTransport::always_ok();
    let result = load(&LoadConfig::default(), &transport).await.unwrap();

    assert_eq!(result.total, 1000);
    assert_eq!(result.sent, 1000);
    assert_eq!(result.requests, 1);
    assert_eq!(result.outcome, LoadOutcome::Indexed);

    let bodies = transport.bodies().await;
    assert_eq!(bodies.len(), 1);

    let lines: Vec<&str> = bodies[0].lines().collect();
    assert_eq!(lines.len(), 2000);
    for pair in lines.chunks(2) {
        assert_eq!(pair[0], INDEX_ACTION_LINE);
        let doc: Value = serde_json::from_str(pair[1]).unwrap();
        for field in ["name", "address", "email", "created_at"] {
            let value = doc[field].as_str().unwrap_or_default();
            assert!(!value.is_empty(), "missing {} in {}", field, pair[1]);
        }
        let person: PersonRecord = serde_json::from_str(pair[1]).unwrap();
        assert!(!person.name.is_empty());
    }
}

/// **Test: 200 response prints exactly the success message.**
#[tokio::test]
async fn test_success_report_is_exact() {
    let transport = MockTransport::new(vec![Reply::Status(200, "{}")]);
    let result = load(&config(5, None), &transport).await.unwrap();

    assert_eq!(render(&result.outcome), "Data indexed successfully.\n");
}

/// **Test: 500 response prints the status and the body text.**
#[tokio::test]
async fn test_failure_report_includes_status_and_body() {
    let transport = MockTransport::new(vec![Reply::Status(500, "error detail")]);
    let result = load(&config(5, None), &transport).await.unwrap();

    assert_eq!(
        result.outcome,
        LoadOutcome::Failed {
            status: 500,
            body: "error detail".to_string()
        }
    );
    assert_eq!(result.sent, 0);

    let out = render(&result.outcome);
    assert!(out.contains("500"));
    assert!(out.contains("error detail"));
}

/// **Test: Batch size splits records across requests without losing any.**
#[tokio::test]
async fn test_batches_cover_every_record() {
    let transport = MockTransport::always_ok();
    let result = load(&config(25, Some(10)), &transport).await.unwrap();

    assert_eq!(result.requests, 3);
    assert_eq!(result.sent, 25);

    let bodies = transport.bodies().await;
    let docs_per_body: Vec<usize> = bodies.iter().map(|b| b.lines().count() / 2).collect();
    assert_eq!(docs_per_body, vec![10, 10, 5]);
}

/// **Test: First rejected batch stops the load.**
#[tokio::test]
async fn test_stops_at_first_rejected_batch() {
    let transport = MockTransport::new(vec![
        Reply::Status(200, "{}"),
        Reply::Status(429, "too many requests"),
    ]);
    let result = load(&config(30, Some(10)), &transport).await.unwrap();

    assert_eq!(result.requests, 2);
    assert_eq!(result.sent, 10);
    assert_eq!(transport.bodies().await.len(), 2);
    assert!(matches!(result.outcome, LoadOutcome::Failed { status: 429, .. }));
}

/// **Test: Zero records sends nothing and reports success.**
#[tokio::test]
async fn test_zero_count_sends_nothing() {
    let transport = MockTransport::always_ok();
    let result = load(&config(0, None), &transport).await.unwrap();

    assert_eq!(result.requests, 0);
    assert!(transport.bodies().await.is_empty());
    assert_eq!(result.outcome, LoadOutcome::Indexed);
}

/// **Test: Transport failure propagates as an error.**
#[tokio::test]
async fn test_transport_failure_propagates() {
    let transport = MockTransport::new(vec![Reply::Unreachable]);
    let err = load(&config(3, None), &transport).await.unwrap_err();

    assert!(format!("{:#}", err).contains("Send bulk batch 0"));
}

/// **Test: Two runs produce different batches.**
#[tokio::test]
async fn test_runs_are_not_deduplicated() {
    let transport = MockTransport::always_ok();
    load(&config(20, None), &transport).await.unwrap();
    load(&config(20, None), &transport).await.unwrap();

    let bodies = transport.bodies().await;
    assert_eq!(bodies.len(), 2);
    assert_ne!(bodies[0], bodies[1]);
}

/// **Test: load_documents sends caller-provided documents verbatim.**
#[tokio::test]
async fn test_load_documents_with_fixed_records() {
    let people = vec![PersonRecord {
        name: "Grace Hopper".to_string(),
        address: "1 Navy Way\nArlington, VA 22202".to_string(),
        email: "grace@example.com".to_string(),
        created_at: "2021-05-04T10:00:00".to_string(),
    }];
    let transport = MockTransport::always_ok();
    load_documents(&people, 0, &transport).await.unwrap();

    let bodies = transport.bodies().await;
    assert_eq!(
        bodies[0],
        "{\"index\":{}}\n{\"name\":\"Grace Hopper\",\"address\":\"1 Navy Way\\nArlington, VA 22202\",\"email\":\"grace@example.com\",\"created_at\":\"2021-05-04T10:00:00\"}\n"
    );
}
