//! Full run against a dashboard answering every probe.

use crate::helpers::*;

fn dashboard_routes() -> Vec<(&'static str, StubResponse)> {
    vec![
        ("/admin/health", StubResponse::json(r#"{"status":"ok"}"#)),
        ("/admin/keys", StubResponse::json(r#"{"keys":[]}"#)),
        ("/admin/model-stats", StubResponse::json(r#"{"models":{}}"#)),
        ("/admin", StubResponse::html("<html></html>")),
    ]
}

/// Report matches the expected transcript exactly
#[tokio::test]
async fn test_full_report() {
    let stub = StubDashboard::with_routes(&dashboard_routes()).await;
    let (result, report) = run_report(&stub.runner()).await;

    assert!(result.is_ok());

    let expected = format!(
        "🚀 Testing Gemini Proxy dashboard\n\
         \n=== Health Check ===\nStatus: 200\nResponse: {{\n  \"status\": \"ok\"\n}}\n\
         \n=== API Keys List ===\nStatus: 200\nResponse: {{\n  \"keys\": []\n}}\n\
         \n=== Model Statistics ===\nStatus: 200\nResponse: {{\n  \"models\": {{}}\n}}\n\
         \n=== Dashboard HTML ===\nStatus: 200\nHTML Response length: 13 chars\n\
         \n✅ Testing complete!\n🌐 Open the dashboard: {}/admin\n",
        stub.base_url
    );
    assert_eq!(report, expected);
}

/// Headers appear once each, in declared order, before the banner
#[tokio::test]
async fn test_header_order() {
    let stub = StubDashboard::with_routes(&dashboard_routes()).await;
    let (_, report) = run_report(&stub.runner()).await;

    assert_eq!(report.matches("=== ").count(), 4);
    assert_eq!(report.matches("Response: ").count(), 3);
    assert_in_order(
        &report,
        &[
            "=== Health Check ===",
            "=== API Keys List ===",
            "=== Model Statistics ===",
            "=== Dashboard HTML ===",
            "HTML Response length: 13 chars",
            "✅ Testing complete!",
        ],
    );
}

/// The runner keeps the base URL it was given
#[tokio::test]
async fn test_runner_config() {
    let stub = StubDashboard::with_routes(&dashboard_routes()).await;
    let runner = stub.runner();

    assert_eq!(runner.config().base_url, stub.base_url);
    assert_eq!(runner.config().probes.len(), 4);
}
