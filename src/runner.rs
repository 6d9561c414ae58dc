//! Sequential probe runner.

use std::io::Write;
use std::time::Instant;

use http::header::CONTENT_TYPE;
use tracing::{debug, error, info, warn};

use crate::config::ProbeConfig;
use crate::error::{describe, Error, Result};
use crate::probe::{Probe, ProbeOutcome, ResponseBody};
use crate::report;

/// Runs the configured probes one after another against the dashboard.
pub struct Runner {
    client: reqwest::Client,
    config: ProbeConfig,
}

impl Runner {
    /// Create a runner. The client has no timeout, default headers or auth.
    pub fn new(config: ProbeConfig) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, config })
    }

    /// Configuration this runner was built with.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Execute a single probe.
    ///
    /// Transport failures, including a body that cannot be read, come back as
    /// `Ok(ProbeOutcome::Exception)`. A 200 JSON response whose body fails to
    /// parse is returned as `Err(Error::Decode)`.
    pub async fn execute(&self, probe: &Probe) -> Result<ProbeOutcome> {
        let url = probe.url(&self.config.base_url);
        debug!(path = probe.path, url = %url, "Sending probe");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return Ok(ProbeOutcome::Exception(describe(&e))),
        };

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return Ok(ProbeOutcome::Exception(describe(&e))),
        };

        let body = ResponseBody::classify(status, content_type.as_deref(), text).map_err(
            |source| Error::Decode {
                path: probe.path.to_string(),
                status,
                source,
            },
        )?;

        Ok(ProbeOutcome::Response {
            status,
            content_type,
            body,
        })
    }

    /// Run every probe in declared order and print the report to `out`.
    ///
    /// Network failures are printed and the run continues. A decode error
    /// stops the run before the completion banner.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        info!(
            base_url = %self.config.base_url,
            probes = self.config.probes.len(),
            "Starting dashboard probes"
        );

        report::write_start(out)?;

        for probe in self.config.probes {
            report::write_header(out, probe)?;

            let started = Instant::now();
            match self.execute(probe).await {
                Ok(outcome) => {
                    let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
                    match &outcome {
                        ProbeOutcome::Response { status, .. } => {
                            info!(
                                path = probe.path,
                                status = *status,
                                duration_ms,
                                "Probe completed"
                            );
                        }
                        ProbeOutcome::Exception(msg) => {
                            warn!(path = probe.path, error = %msg, duration_ms, "Probe failed");
                        }
                    }
                    report::write_outcome(out, &outcome)?;
                }
                Err(err) => {
                    // The status line precedes the failed decode
                    if let Error::Decode { status, .. } = &err {
                        report::write_status(out, *status)?;
                    }
                    out.flush()?;
                    error!(path = probe.path, error = %err, "Aborting probe run");
                    return Err(err);
                }
            }
        }

        report::write_completion(out, &self.config.dashboard_url())?;
        out.flush()?;

        info!("Dashboard probes finished");
        Ok(())
    }
}
