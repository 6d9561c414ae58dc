//! Target dashboard configuration.

use reqwest::Url;

use super::parse::env_opt;
use super::ConfigError;
use crate::probe::{Probe, DEFAULT_PROBES};

/// Dashboard address used when `DASHBOARD_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Probe configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct ProbeConfig {
    /// Base URL every probe path is appended to.
    pub base_url: String,
    /// Probes executed in declared order.
    pub probes: &'static [Probe],
}

impl ProbeConfig {
    /// Load configuration from environment variables.
    ///
    /// `DASHBOARD_URL` overrides the default `http://localhost:8081`.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env_opt("DASHBOARD_URL") {
            Some(url) => Self::with_base_url(url),
            None => Self::with_base_url(DEFAULT_BASE_URL),
        }
    }

    /// Build a configuration for the given base URL with the default probes.
    ///
    /// The URL is kept verbatim; it only has to be an absolute http(s) URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        validate_base_url(&base_url)?;
        Ok(Self {
            base_url,
            probes: &DEFAULT_PROBES,
        })
    }

    /// Address shown to the operator once all probes have run.
    pub fn dashboard_url(&self) -> String {
        format!("{}/admin", self.base_url)
    }
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(base_url).map_err(|e| ConfigError::Parse {
        key: "DASHBOARD_URL".into(),
        value: base_url.to_string(),
        error: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::Invalid {
                key: "DASHBOARD_URL".into(),
                message: format!("unsupported scheme '{}'", other),
            })
        }
    }

    if url.host_str().is_none() {
        return Err(ConfigError::Invalid {
            key: "DASHBOARD_URL".into(),
            message: "missing host".into(),
        });
    }

    Ok(())
}
