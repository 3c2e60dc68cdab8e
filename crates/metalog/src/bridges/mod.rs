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

//! Backends ("bridges") that receive finished records.
//!
//! The [`Backend`] trait exposes one method per [`BackendLevel`]. A
//! [`Logger`](crate::Logger) translates each record's severity and calls the
//! matching method through [`dispatch`].
//!
//! # Available bridges
//!
//! - [`console::ConsoleBackend`]: human-readable or JSON lines on a terminal,
//!   the default when no backend is supplied
//! - [`json::JsonBackend`]: one JSON document per line on any writer
//! - [`memory::MemoryBackend`]: captures records in memory
//! - `tracing_adapter::TracingBackend`: forwards records as `tracing` events
//!   (requires the `tracing-bridge` feature)
//!
//! # Implementation Guide
//!
//! Implementors usually only provide [`Backend::emit`]; the five level
//! methods delegate to it. Backends must not panic on well-formed records and
//! handle their own I/O failures.

pub mod console;
pub mod json;
pub mod memory;
#[cfg(feature = "tracing-bridge")]
pub mod tracing_adapter;

use crate::config::LoggerConfig;
use crate::error::{LogError, LogResult};
use crate::record::LogRecord;
use crate::severity::BackendLevel;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;
use std::sync::Arc;

pub use console::ConsoleBackend;
pub use json::JsonBackend;
pub use memory::MemoryBackend;
#[cfg(feature = "tracing-bridge")]
pub use tracing_adapter::TracingBackend;

/// Receiver of normalized records
pub trait Backend: Send + Sync + Debug {
    /// Handle a record at the given backend level
    fn emit(&self, level: BackendLevel, record: &LogRecord);

    /// Handle an `error` record
    fn error(&self, record: &LogRecord) {
        self.emit(BackendLevel::Error, record);
    }

    /// Handle a `warn` record
    fn warn(&self, record: &LogRecord) {
        self.emit(BackendLevel::Warn, record);
    }

    /// Handle a `verbose` record
    fn verbose(&self, record: &LogRecord) {
        self.emit(BackendLevel::Verbose, record);
    }

    /// Handle an `info` record
    fn info(&self, record: &LogRecord) {
        self.emit(BackendLevel::Info, record);
    }

    /// Handle a `debug` record
    fn debug(&self, record: &LogRecord) {
        self.emit(BackendLevel::Debug, record);
    }
}

/// Call the backend method that matches `level`
pub fn dispatch(backend: &dyn Backend, level: BackendLevel, record: &LogRecord) {
    match level {
        BackendLevel::Error => backend.error(record),
        BackendLevel::Warn => backend.warn(record),
        BackendLevel::Verbose => backend.verbose(record),
        BackendLevel::Info => backend.info(record),
        BackendLevel::Debug => backend.debug(record),
    }
}

/// Bridges that can be selected by name in configuration
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Terminal output, see [`ConsoleBackend`]
    #[default]
    Console,
    /// JSON lines on the configured output stream, see [`JsonBackend`]
    Json,
    /// `tracing` events
    Tracing,
}

impl BackendKind {
    /// Name used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Console => "console",
            BackendKind::Json => "json",
            BackendKind::Tracing => "tracing",
        }
    }

    /// Construct the bridge described by `config`.
    ///
    /// Fails with [`LogError::BackendUnavailable`] when the bridge was
    /// compiled out of this build.
    pub fn build(&self, config: &LoggerConfig) -> LogResult<Arc<dyn Backend>> {
        match self {
            BackendKind::Console => Ok(Arc::new(ConsoleBackend::from_config(config))),
            BackendKind::Json => Ok(Arc::new(JsonBackend::for_output(config.output))),
            BackendKind::Tracing => build_tracing(),
        }
    }
}

#[cfg(feature = "tracing-bridge")]
fn build_tracing() -> LogResult<Arc<dyn Backend>> {
    Ok(Arc::new(TracingBackend::new()))
}

#[cfg(not(feature = "tracing-bridge"))]
fn build_tracing() -> LogResult<Arc<dyn Backend>> {
    Err(LogError::backend_unavailable(
        "tracing",
        "rebuild metalog with the `tracing-bridge` feature enabled",
    ))
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "console" => Ok(BackendKind::Console),
            "json" => Ok(BackendKind::Json),
            "tracing" => Ok(BackendKind::Tracing),
            _ => Err(LogError::UnknownBackend(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use crate::test_support::record;

    #[test]
    fn test_dispatch_calls_matching_method() {
        let backend = MemoryBackend::new();
        for level in [
            BackendLevel::Error,
            BackendLevel::Warn,
            BackendLevel::Verbose,
            BackendLevel::Info,
            BackendLevel::Debug,
        ] {
            dispatch(&backend, level, &record(Severity::Info, "m"));
        }
        let levels: Vec<BackendLevel> = backend.calls().into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            levels,
            vec![
                BackendLevel::Error,
                BackendLevel::Warn,
                BackendLevel::Verbose,
                BackendLevel::Info,
                BackendLevel::Debug,
            ]
        );
    }

    #[test]
    fn test_backend_kind_parsing() {
        assert_eq!("console".parse::<BackendKind>().unwrap(), BackendKind::Console);
        assert_eq!("JSON".parse::<BackendKind>().unwrap(), BackendKind::Json);
        assert_eq!("tracing".parse::<BackendKind>().unwrap(), BackendKind::Tracing);
        assert!(matches!(
            "loggly".parse::<BackendKind>(),
            Err(LogError::UnknownBackend(name)) if name == "loggly"
        ));
    }

    #[test]
    fn test_build_console_and_json() {
        let config = LoggerConfig::new();
        assert!(BackendKind::Console.build(&config).is_ok());
        assert!(BackendKind::Json.build(&config).is_ok());
    }

    #[cfg(feature = "tracing-bridge")]
    #[test]
    fn test_build_tracing_when_enabled() {
        assert!(BackendKind::Tracing.build(&LoggerConfig::new()).is_ok());
    }

    #[cfg(not(feature = "tracing-bridge"))]
    #[test]
    fn test_build_tracing_when_compiled_out() {
        let err = BackendKind::Tracing.build(&LoggerConfig::new()).unwrap_err();
        assert!(matches!(err, LogError::BackendUnavailable { .. }));
    }
}
