use std::env;

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::{AppEnvironment, TelemetryConfig};

/// How log lines are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    /// Coloured, with the emitting module, for a developer terminal.
    Readable,
    /// No escape codes or module targets, for captured CI and production logs.
    Plain,
}

impl LogStyle {
    pub fn for_environment(environment: AppEnvironment) -> Self {
        match environment {
            AppEnvironment::Development => Self::Readable,
            AppEnvironment::Test | AppEnvironment::Production => Self::Plain,
        }
    }

    fn ansi(self) -> bool {
        matches!(self, Self::Readable)
    }

    fn show_target(self) -> bool {
        matches!(self, Self::Readable)
    }
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("unable to install the log subscriber: {0}")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// `RUST_LOG` wins when it parses; otherwise the configured level applies.
fn build_filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|source| TelemetryError::Filter {
        value: level.to_string(),
        source,
    })
}

/// Installs the global subscriber. Logs go to stderr so JSON reports on stdout stay clean.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let rust_log = env::var("RUST_LOG").ok();
    let filter = build_filter(rust_log.as_deref(), &config.log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.style.ansi())
        .with_target(config.style.show_target())
        .compact()
        .try_init()
        .map_err(TelemetryError::Install)
}
