//! Log subscriber setup.
//!
//! The CLI logs compact lines to stderr (stdout carries the rendered room
//! status); an unattended panel process logs JSON. `RUST_LOG` always wins
//! over the configured level.
//!
//! ```ignore
//! use roomstatus_core::tracing::{init_tracing, TracingConfig};
//!
//! init_tracing(TracingConfig::cli(debug))?;
//! ```

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Crate prefix matched by the default filter directive.
const TARGET_PREFIX: &str = "roomstatus";

/// Errors from subscriber installation.
#[derive(Debug, Error)]
pub enum TracingError {
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("invalid log filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingOutputFormat {
    /// Multi-line, for reading a debug session.
    Pretty,
    /// One line per event.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Level for `roomstatus*` targets when `RUST_LOG` is unset.
    pub default_level: Level,
    pub output_format: TracingOutputFormat,
    /// Emit file and line.
    pub include_location: bool,
    pub include_target: bool,
    pub include_timestamp: bool,
    /// Log span open/close, useful to time refreshes.
    pub include_span_events: bool,
    /// Explicit filter directive; replaces both `RUST_LOG` and `default_level`.
    pub env_filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::cli(false)
    }
}

impl TracingConfig {
    /// Settings for the command line: warnings only, or everything from
    /// debug level with source locations when `debug` is set.
    #[must_use]
    pub fn cli(debug: bool) -> Self {
        Self {
            default_level: if debug { Level::DEBUG } else { Level::WARN },
            output_format: TracingOutputFormat::Compact,
            include_location: debug,
            include_target: debug,
            include_timestamp: false,
            include_span_events: false,
            env_filter: None,
        }
    }

    /// Settings for a panel process left running on a wall-mounted device.
    #[must_use]
    pub fn panel() -> Self {
        Self {
            default_level: Level::INFO,
            output_format: TracingOutputFormat::Json,
            include_location: false,
            include_target: true,
            include_timestamp: true,
            include_span_events: false,
            env_filter: None,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: TracingOutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Directive used when neither `env_filter` nor `RUST_LOG` is set.
    pub fn default_directive(&self) -> String {
        format!("{}={}", TARGET_PREFIX, self.default_level)
    }

    fn filter(&self) -> Result<EnvFilter, TracingError> {
        match self.env_filter {
            Some(ref directive) => Ok(EnvFilter::try_new(directive)?),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.default_directive()))),
        }
    }
}

/// Installs the global subscriber. Call once, early in `main`.
///
/// # Errors
///
/// Fails if a subscriber is already installed or `env_filter` does not parse.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let filter = config.filter()?;

    let span_events = if config.include_span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_target(config.include_target)
        .with_span_events(span_events);

    let layer = match (config.output_format, config.include_timestamp) {
        (TracingOutputFormat::Pretty, _) => base.pretty().boxed(),
        (TracingOutputFormat::Compact, true) => base.compact().boxed(),
        (TracingOutputFormat::Compact, false) => base.compact().without_time().boxed(),
        (TracingOutputFormat::Json, true) => base.json().boxed(),
        (TracingOutputFormat::Json, false) => base.json().without_time().boxed(),
    };

    tracing::subscriber::set_global_default(tracing_subscriber::registry().with(filter).with(layer))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_quiet_by_default() {
        let config = TracingConfig::default();
        assert_eq!(config, TracingConfig::cli(false));
        assert_eq!(config.default_level, Level::WARN);
        assert_eq!(config.output_format, TracingOutputFormat::Compact);
        assert!(!config.include_location);
        assert_eq!(config.default_directive(), "roomstatus=WARN");
    }

    #[test]
    fn cli_debug_turns_on_detail() {
        let config = TracingConfig::cli(true);
        assert_eq!(config.default_level, Level::DEBUG);
        assert!(config.include_location);
        assert!(config.include_target);
    }

    #[test]
    fn panel_logs_json_with_time() {
        let config = TracingConfig::panel();
        assert_eq!(config.output_format, TracingOutputFormat::Json);
        assert!(config.include_timestamp);
        assert_eq!(config.default_level, Level::INFO);
    }

    #[test]
    fn explicit_filter_is_parsed() {
        let config = TracingConfig::panel().with_env_filter("roomstatus_room=trace");
        assert!(config.filter().is_ok());

        let bad = TracingConfig::panel().with_env_filter("roomstatus_room=loud");
        assert!(matches!(bad.filter(), Err(TracingError::EnvFilter(_))));
    }

    #[test]
    fn builder_methods() {
        let config = TracingConfig::cli(false)
            .with_level(Level::INFO)
            .with_format(TracingOutputFormat::Pretty);
        assert_eq!(config.default_level, Level::INFO);
        assert_eq!(config.output_format, TracingOutputFormat::Pretty);
    }
}
