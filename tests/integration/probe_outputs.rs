//! Per-probe report lines for the different kinds of responses.

use crate::helpers::*;
use dashboard_probe::{ProbeOutcome, ResponseBody, DEFAULT_PROBES};
use serde_json::json;

/// Every probe prints status 200 and the pretty-printed JSON body
#[tokio::test]
async fn test_json_response_is_pretty_printed() {
    let stub = StubDashboard::uniform(StubResponse::json(
        r#"{"status":"ok","uptime":12.5,"nested":{"b":1,"a":[true,null]}}"#,
    ))
    .await;
    let (result, report) = run_report(&stub.runner()).await;

    assert!(result.is_ok());
    let expected = "Status: 200\nResponse: {\n  \"status\": \"ok\",\n  \"uptime\": 12.5,\n  \"nested\": {\n    \"b\": 1,\n    \"a\": [\n      true,\n      null\n    ]\n  }\n}\n";
    assert_eq!(report.matches(expected).count(), DEFAULT_PROBES.len());
}

/// Parsed JSON matches the served document exactly
#[tokio::test]
async fn test_json_round_trip_is_lossless() {
    let doc = json!({"keys": [{"id": "k1", "active": true, "requests": 42}], "total": 1});
    let stub = StubDashboard::uniform(StubResponse::json(doc.to_string())).await;
    let runner = stub.runner();

    for probe in &DEFAULT_PROBES {
        let outcome = runner.execute(probe).await.expect("Probe should succeed");
        match outcome {
            ProbeOutcome::Response { status, body, .. } => {
                assert_eq!(status, 200);
                assert_eq!(body, ResponseBody::Json(doc.clone()));
            }
            other => panic!("Unexpected outcome for {}: {:?}", probe.path, other),
        }
    }
}

/// Non-JSON bodies report only their length
#[tokio::test]
async fn test_html_reports_length_only() {
    let stub = StubDashboard::uniform(StubResponse::html("Hello")).await;
    let (result, report) = run_report(&stub.runner()).await;

    assert!(result.is_ok());
    assert_eq!(report.matches("HTML Response length: 5 chars").count(), 4);
    assert!(!report.contains("Hello"), "Raw body must not be printed");
}

/// Content type is recorded as sent
#[tokio::test]
async fn test_content_type_is_captured() {
    let stub = StubDashboard::uniform(StubResponse::new(
        200,
        Some("text/html; charset=utf-8"),
        "<p>é</p>",
    ))
    .await;

    let outcome = stub.runner().execute(&DEFAULT_PROBES[3]).await.unwrap();
    assert_eq!(
        outcome,
        ProbeOutcome::Response {
            status: 200,
            content_type: Some("text/html; charset=utf-8".to_string()),
            body: ResponseBody::Length(8),
        }
    );
}

/// Missing content type is treated as non-JSON
#[tokio::test]
async fn test_missing_content_type() {
    let stub = StubDashboard::uniform(StubResponse::new(200, None, r#"{"a":1}"#)).await;

    let outcome = stub.runner().execute(&DEFAULT_PROBES[0]).await.unwrap();
    assert_eq!(
        outcome,
        ProbeOutcome::Response {
            status: 200,
            content_type: None,
            body: ResponseBody::Length(7),
        }
    );
}

/// Non-200 status prints the raw body even when it claims JSON
#[tokio::test]
async fn test_error_status_takes_precedence() {
    let stub = StubDashboard::uniform(StubResponse::new(500, Some("application/json"), "boom"))
        .await;
    let (result, report) = run_report(&stub.runner()).await;

    assert!(result.is_ok());
    assert_eq!(report.matches("Status: 500\nError: boom\n").count(), 4);
    assert!(!report.contains("Response:"));
}

/// 404 with an HTML body is reported as an error too
#[tokio::test]
async fn test_not_found_is_reported() {
    let stub = StubDashboard::with_routes(&[]).await;
    let (result, report) = run_report(&stub.runner()).await;

    assert!(result.is_ok());
    assert_eq!(report.matches("Status: 404\nError: not found\n").count(), 4);
}

/// Integers beyond the 64-bit range are printed digit for digit
#[tokio::test]
async fn test_large_integers_are_not_rounded() {
    let stub = StubDashboard::uniform(StubResponse::json(
        r#"{"total_tokens":123456789012345678901234567890,"ratio":0.1000000000000000055511151231257827}"#,
    ))
    .await;
    let (result, report) = run_report(&stub.runner()).await;

    assert!(result.is_ok());
    assert_eq!(
        report
            .matches("\"total_tokens\": 123456789012345678901234567890,")
            .count(),
        4
    );
    assert_eq!(
        report
            .matches("\"ratio\": 0.1000000000000000055511151231257827\n")
            .count(),
        4
    );
    assert!(!report.contains("e+29"));
}

/// Text without a declared charset is decoded as UTF-8
#[tokio::test]
async fn test_text_without_charset_decodes_as_utf8() {
    let stub = StubDashboard::uniform(StubResponse::html("<p>é</p>")).await;

    let outcome = stub.runner().execute(&DEFAULT_PROBES[3]).await.unwrap();
    assert_eq!(
        outcome,
        ProbeOutcome::Response {
            status: 200,
            content_type: Some("text/html".to_string()),
            body: ResponseBody::Length(8),
        }
    );
}
