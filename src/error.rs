//! Crate error types.
//!
//! Transport failures are not errors here: they are reported as
//! [`ProbeOutcome::Exception`](crate::probe::ProbeOutcome::Exception) and the
//! run continues. Everything in [`Error`] stops the run.

use std::fmt;

use crate::config::ConfigError;

/// Errors that abort a probe run.
#[derive(Debug)]
pub enum Error {
    /// Invalid configuration.
    Config(ConfigError),

    /// HTTP client could not be constructed.
    Client(reqwest::Error),

    /// A 200 response advertised JSON but its body did not parse.
    Decode {
        path: String,
        status: u16,
        source: serde_json::Error,
    },

    /// Writing the report failed.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "configuration error: {}", e),
            Error::Client(e) => write!(f, "failed to build HTTP client: {}", e),
            Error::Decode { path, source, .. } => {
                write!(f, "invalid JSON body from {}: {}", path, source)
            }
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            Error::Client(e) => Some(e),
            Error::Decode { source, .. } => Some(source),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Client(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for probe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Render an error together with its source chain, joined by `": "`.
pub fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_msg = cause.to_string();
        // reqwest repeats the inner message in some Display impls
        if !msg.ends_with(&cause_msg) {
            msg.push_str(": ");
            msg.push_str(&cause_msg);
        }
        source = cause.source();
    }
    msg
}
