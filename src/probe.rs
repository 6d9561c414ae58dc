//! Probe definitions and per-probe outcomes.

use http::StatusCode;
use serde_json::Value;

/// MIME type whose presence in `content-type` makes a body parse as JSON.
const JSON_MIME: &str = "application/json";

/// One diagnostic GET against the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe {
    /// Path appended to the base URL.
    pub path: &'static str,
    /// Human-readable title printed above the result.
    pub description: &'static str,
}

impl Probe {
    pub const fn new(path: &'static str, description: &'static str) -> Self {
        Self { path, description }
    }

    /// Full request URL. Plain concatenation, no normalisation.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path)
    }
}

/// Probes executed by the binary, in order.
pub const DEFAULT_PROBES: [Probe; 4] = [
    Probe::new("/admin/health", "Health Check"),
    Probe::new("/admin/keys", "API Keys List"),
    Probe::new("/admin/model-stats", "Model Statistics"),
    Probe::new("/admin", "Dashboard HTML"),
];

/// Result of executing a single probe.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// The server answered.
    Response {
        status: u16,
        content_type: Option<String>,
        body: ResponseBody,
    },
    /// The request never produced a readable response.
    Exception(String),
}

/// What is reported about a response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Parsed JSON document.
    Json(Value),
    /// Character count of a non-JSON body.
    Length(usize),
    /// Raw body of a non-200 response.
    Error(String),
}

impl ResponseBody {
    /// Decide how a response body is reported.
    ///
    /// A non-200 status always yields [`ResponseBody::Error`], whatever the
    /// content type. The JSON check is a case-sensitive substring match.
    pub fn classify(
        status: u16,
        content_type: Option<&str>,
        text: String,
    ) -> Result<Self, serde_json::Error> {
        if status != StatusCode::OK.as_u16() {
            return Ok(ResponseBody::Error(text));
        }

        if content_type.unwrap_or("").contains(JSON_MIME) {
            serde_json::from_str(&text).map(ResponseBody::Json)
        } else {
            Ok(ResponseBody::Length(text.chars().count()))
        }
    }
}
