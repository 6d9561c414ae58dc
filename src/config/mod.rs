//! Configuration module for dashboard_probe.
//!
//! All settings are read once from environment variables at start-up and are
//! immutable afterwards. The binary itself takes no arguments or flags.
//!
//! # Example
//!
//! ```rust,ignore
//! use dashboard_probe::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Dashboard: {}", config.probe.base_url);
//! ```

mod error;
mod logging;
mod parse;
mod probe;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig, DEFAULT_FILTER};
pub use probe::{ProbeConfig, DEFAULT_BASE_URL};

/// Complete application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Target dashboard and probe list.
    pub probe: ProbeConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            probe: ProbeConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::debug;

        debug!("Configuration loaded:");
        debug!("  Dashboard: {}", self.probe.base_url);
        debug!("  Probes: {}", self.probe.probes.len());
        debug!("  Log filter: {}", self.logging.filter);
        debug!("  Log format: {:?}", self.logging.format);
    }
}
