//! dashboard_probe - manual smoke test for the Gemini Proxy admin dashboard.
//!
//! Issues a fixed sequence of GET requests against a running dashboard and
//! prints what came back for a human to inspect. Nothing is asserted and no
//! result is aggregated.
//!
//! # Behaviour
//!
//! - Probes run strictly one after another, in declared order
//! - A network failure is printed as `Exception: ...` and the run continues
//! - A 200 response claiming JSON but carrying an invalid body aborts the run
//!
//! # Example
//!
//! ```rust,ignore
//! use dashboard_probe::{config::ProbeConfig, Runner};
//!
//! let runner = Runner::new(ProbeConfig::with_base_url("http://localhost:8081")?)?;
//! runner.run(&mut std::io::stdout()).await?;
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (8 chars) with optional "-dirty" suffix
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Full version string: "0.1.0 (abc12345)" or "0.1.0 (abc12345-dirty)"
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_VERSION"), ")");

pub mod config;
pub mod error;
pub mod logging;
pub mod probe;
pub mod report;
pub mod runner;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use probe::{Probe, ProbeOutcome, ResponseBody, DEFAULT_PROBES};
pub use runner::Runner;
