//! Human-readable report written to stdout.

use std::io::{self, Write};

use crate::probe::{Probe, ProbeOutcome, ResponseBody};

/// Opening banner.
pub const START_BANNER: &str = "🚀 Testing Gemini Proxy dashboard";

/// Closing banner printed once every probe has run.
pub const COMPLETION_BANNER: &str = "✅ Testing complete!";

/// Write the opening banner.
pub fn write_start<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", START_BANNER)
}

/// Write the section header for a probe.
pub fn write_header<W: Write>(out: &mut W, probe: &Probe) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== {} ===", probe.description)
}

/// Write the status line alone.
pub fn write_status<W: Write>(out: &mut W, status: u16) -> io::Result<()> {
    writeln!(out, "Status: {}", status)
}

/// Write a probe outcome.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &ProbeOutcome) -> io::Result<()> {
    out.write_all(render_outcome(outcome).as_bytes())
}

/// Write the completion banner and the dashboard reminder.
pub fn write_completion<W: Write>(out: &mut W, dashboard_url: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", COMPLETION_BANNER)?;
    writeln!(out, "🌐 Open the dashboard: {}", dashboard_url)
}

/// Render a probe outcome as the lines printed below its header.
pub fn render_outcome(outcome: &ProbeOutcome) -> String {
    match outcome {
        ProbeOutcome::Response { status, body, .. } => {
            let detail = match body {
                ResponseBody::Json(value) => {
                    // Serializing a Value cannot fail
                    let pretty = serde_json::to_string_pretty(value).unwrap_or_default();
                    format!("Response: {}", pretty)
                }
                ResponseBody::Length(chars) => format!("HTML Response length: {} chars", chars),
                ResponseBody::Error(text) => format!("Error: {}", text),
            };
            format!("Status: {}\n{}\n", status, detail)
        }
        ProbeOutcome::Exception(msg) => format!("Exception: {}\n", msg),
    }
}
