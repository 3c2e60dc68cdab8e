// Metalog - Leveled JSON logging façade
// Copyright (C) 2026 Metalog Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

//! Bridge into the `tracing` ecosystem.
//!
//! Records become `tracing` events with target `metalog` and the record's
//! fields attached; the source severity travels as the `severity` field.
//! Backend levels map onto tracing levels as:
//!
//! | Backend   | tracing |
//! |-----------|---------|
//! | `error`   | ERROR   |
//! | `warn`    | WARN    |
//! | `info`    | INFO    |
//! | `verbose` | DEBUG   |
//! | `debug`   | TRACE   |
//!
//! [`init_tracing`] installs a global subscriber for applications that do
//! not already have one.

use super::Backend;
use crate::config::{LogFormat, LogOutput, LoggerConfig};
use crate::error::{LogError, LogResult};
use crate::record::LogRecord;
use crate::severity::BackendLevel;
use std::io;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Forwards records as `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    /// Create the bridge
    pub fn new() -> Self {
        TracingBackend
    }
}

/// tracing level a backend level is emitted at
pub fn tracing_level(level: BackendLevel) -> Level {
    match level {
        BackendLevel::Error => Level::ERROR,
        BackendLevel::Warn => Level::WARN,
        BackendLevel::Info => Level::INFO,
        BackendLevel::Verbose => Level::DEBUG,
        BackendLevel::Debug => Level::TRACE,
    }
}

macro_rules! record_event {
    ($level:expr, $record:expr) => {
        tracing::event!(
            target: "metalog",
            $level,
            timestamp = $record.timestamp(),
            hostname = $record.hostname(),
            severity = $record.level().as_str(),
            file = $record.file(),
            line = $record.line(),
            caption = $record.caption(),
            message = %$record.message_text(),
        )
    };
}

impl Backend for TracingBackend {
    fn emit(&self, level: BackendLevel, record: &LogRecord) {
        match level {
            BackendLevel::Error => record_event!(Level::ERROR, record),
            BackendLevel::Warn => record_event!(Level::WARN, record),
            BackendLevel::Info => record_event!(Level::INFO, record),
            BackendLevel::Verbose => record_event!(Level::DEBUG, record),
            BackendLevel::Debug => record_event!(Level::TRACE, record),
        }
    }
}

/// Install a global `tracing` subscriber for the tracing bridge.
///
/// The filter is `RUST_LOG` when set, otherwise derived from the console
/// threshold of `config`. Fails if a global subscriber is already set.
///
/// # Example
///
/// ```ignore
/// use metalog::{bridges::tracing_adapter::init_tracing, LoggerConfig, LogFormat};
///
/// init_tracing(&LoggerConfig::new().with_format(LogFormat::Json))?;
/// ```
pub fn init_tracing(config: &LoggerConfig) -> LogResult<()> {
    let env_filter = build_env_filter(config)?;
    let registry = Registry::default().with(env_filter);

    let result = match config.format {
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(get_writer(config.output))
                .with_ansi(config.use_color)
                .with_target(false)
                .pretty();
            if config.use_timestamps {
                registry.with(layer).try_init()
            } else {
                registry.with(layer.without_time()).try_init()
            }
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .with_writer(get_writer(config.output))
                .with_ansi(config.use_color)
                .with_target(false)
                .compact();
            if config.use_timestamps {
                registry.with(layer).try_init()
            } else {
                registry.with(layer.without_time()).try_init()
            }
        }
        LogFormat::Json => {
            // Records carry their own timestamp field
            let layer = fmt::layer()
                .with_writer(get_writer(config.output))
                .json()
                .flatten_event(true)
                .with_target(false)
                .without_time();
            registry.with(layer).try_init()
        }
    };

    result.map_err(|e| LogError::config_error(format!("Failed to install tracing subscriber: {}", e)))
}

/// Get the writer for the specified output
fn get_writer(output: LogOutput) -> fn() -> Box<dyn io::Write + Send> {
    match output {
        LogOutput::Stderr => || Box::new(io::stderr()),
        LogOutput::Stdout => || Box::new(io::stdout()),
    }
}

/// Filter directive for `config`
fn filter_directive(config: &LoggerConfig) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| {
        tracing_level(config.get_console_level())
            .to_string()
            .to_lowercase()
    })
}

/// Build an environment filter for the given configuration
fn build_env_filter(config: &LoggerConfig) -> LogResult<EnvFilter> {
    let directive = filter_directive(config);
    EnvFilter::try_new(&directive).map_err(|e| {
        LogError::config_error(format!("Failed to parse log filter '{}': {}", directive, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use crate::test_support::captioned_record;

    // Installing the global subscriber is not tested here: it can only be
    // set once per process.

    #[test]
    fn test_level_mapping() {
        assert_eq!(tracing_level(BackendLevel::Error), Level::ERROR);
        assert_eq!(tracing_level(BackendLevel::Verbose), Level::DEBUG);
        assert_eq!(tracing_level(BackendLevel::Debug), Level::TRACE);
    }

    #[test]
    fn test_env_filter_from_console_level() {
        let config = LoggerConfig::new().with_console_level("verbose");
        assert!(build_env_filter(&config).is_ok());
    }

    #[test]
    fn test_emit_without_subscriber_is_harmless() {
        let backend = TracingBackend::new();
        backend.error(&captioned_record(Severity::Emergency, "Power", "lost"));
        backend.debug(&captioned_record(Severity::Debug, "Power", "ok"));
    }
}
