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

//! The logger and its eight severity entry points.
//!
//! A [`Logger`] owns its gate and backend. It is built once at startup and
//! passed (usually behind an `Arc` or by clone) to the code that logs.
//!
//! # Example
//!
//! ```rust
//! use metalog::{bridges::MemoryBackend, Logger};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let backend = MemoryBackend::new();
//! let logger = Logger::new(Some("debug"), Some(Arc::new(backend.clone()))).unwrap();
//!
//! logger.info("service started");
//! logger.notice(("Config", json!({"workers": 4})));
//! metalog::error!(logger, "Db", "query failed after %d retries", 3);
//!
//! let records = backend.records();
//! assert_eq!(records[1].message(), &json!("{ workers: 4 }"));
//! assert_eq!(records[2].message(), &json!("query failed after 3 retries"));
//! ```

use crate::bridges::{self, Backend};
use crate::callsite::{CallPosition, CallerLocation};
use crate::config::LoggerConfig;
use crate::error::LogResult;
use crate::gate::LevelGate;
use crate::record::{local_hostname, Normalizer};
use crate::severity::{to_backend_level, Severity};
use crate::shape::CallShape;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Leveled logger that forwards normalized records to one backend
#[derive(Clone)]
pub struct Logger {
    normalizer: Normalizer,
    backend: Arc<dyn Backend>,
}

impl Logger {
    /// Build a logger from an optional minimum level and an optional backend.
    ///
    /// Without a level, `NODE_LOGGER_LEVEL` (or `debug`) applies. Without a
    /// backend, a console bridge is created.
    pub fn new(level: Option<&str>, backend: Option<Arc<dyn Backend>>) -> LogResult<Self> {
        let mut builder = Logger::builder();
        if let Some(level) = level {
            builder = builder.level(level);
        }
        if let Some(backend) = backend {
            builder = builder.backend(backend);
        }
        builder.build()
    }

    /// Start building a logger
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Minimum severity this logger emits
    pub fn minimum_level(&self) -> Severity {
        self.normalizer.gate().minimum()
    }

    /// Whether a call at `severity` would reach the backend
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.normalizer.gate().is_enabled(severity)
    }

    /// Hostname stamped on this logger's records
    pub fn hostname(&self) -> &str {
        self.normalizer.hostname()
    }

    /// Log at an arbitrary severity
    #[track_caller]
    pub fn log(&self, severity: Severity, shape: impl Into<CallShape>) {
        self.log_at(severity, shape, Location::caller());
    }

    /// Log at an arbitrary severity, attributing the call to `location`
    pub fn log_at(
        &self,
        severity: Severity,
        shape: impl Into<CallShape>,
        location: &'static Location<'static>,
    ) {
        if let Some(record) = self.normalizer.normalize(severity, shape, location) {
            let level = to_backend_level(record.level());
            bridges::dispatch(self.backend.as_ref(), level, &record);
        }
    }

    /// Log at `debug`
    #[track_caller]
    pub fn debug(&self, shape: impl Into<CallShape>) {
        self.log_at(Severity::Debug, shape, Location::caller());
    }

    /// Log at `info`
    #[track_caller]
    pub fn info(&self, shape: impl Into<CallShape>) {
        self.log_at(Severity::Info, shape, Location::caller());
    }

    /// Log at `notice`
    #[track_caller]
    pub fn notice(&self, shape: impl Into<CallShape>) {
        self.log_at(Severity::Notice, shape, Location::caller());
    }

    /// Log at `warning`
    #[track_caller]
    pub fn warning(&self, shape: impl Into<CallShape>) {
        self.log_at(Severity::Warning, shape, Location::caller());
    }

    /// Log at `error`
    #[track_caller]
    pub fn error(&self, shape: impl Into<CallShape>) {
        self.log_at(Severity::Error, shape, Location::caller());
    }

    /// Log at `critical`
    #[track_caller]
    pub fn critical(&self, shape: impl Into<CallShape>) {
        self.log_at(Severity::Critical, shape, Location::caller());
    }

    /// Log at `alert`
    #[track_caller]
    pub fn alert(&self, shape: impl Into<CallShape>) {
        self.log_at(Severity::Alert, shape, Location::caller());
    }

    /// Log at `emergency`
    #[track_caller]
    pub fn emergency(&self, shape: impl Into<CallShape>) {
        self.log_at(Severity::Emergency, shape, Location::caller());
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("minimum_level", &self.minimum_level())
            .field("hostname", &self.hostname())
            .field("backend", &self.backend)
            .finish()
    }
}

/// Builder for [`Logger`]
#[derive(Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    backend: Option<Arc<dyn Backend>>,
    call_position: Option<Arc<dyn CallPosition>>,
}

impl LoggerBuilder {
    /// Replace the whole configuration
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the minimum severity by name
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.config.level = Some(level.into());
        self
    }

    /// Use an existing backend instead of building one
    pub fn backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Select the bridge to build when no backend instance is given
    pub fn backend_kind(mut self, kind: bridges::BackendKind) -> Self {
        self.config.backend = kind;
        self
    }

    /// Override the hostname stamped on records
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.config.hostname = Some(hostname.into());
        self
    }

    /// Use a custom call-site provider
    pub fn call_position(mut self, provider: Arc<dyn CallPosition>) -> Self {
        self.call_position = Some(provider);
        self
    }

    /// Build the logger.
    ///
    /// Fails only when the configured bridge cannot be constructed.
    pub fn build(self) -> LogResult<Logger> {
        let LoggerBuilder {
            config,
            backend,
            call_position,
        } = self;

        let gate = LevelGate::from_name(&config.get_effective_level());
        let backend = match backend {
            Some(backend) => backend,
            None => config.backend.build(&config)?,
        };
        let hostname = config.hostname.clone().unwrap_or_else(local_hostname);
        let call_position = call_position.unwrap_or_else(|| Arc::new(CallerLocation));

        tracing::debug!(
            minimum = %gate.minimum(),
            backend = ?backend,
            hostname = %hostname,
            "metalog logger ready"
        );

        Ok(Logger {
            normalizer: Normalizer::new(gate, hostname, call_position),
            backend,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::bridges::MemoryBackend;
    use crate::severity::BackendLevel;
    use serde_json::json;

    fn logger(level: &str) -> (Logger, MemoryBackend) {
        let backend = MemoryBackend::new();
        let logger = Logger::builder()
            .level(level)
            .hostname("unit")
            .backend(Arc::new(backend.clone()))
            .build()
            .unwrap();
        (logger, backend)
    }

    #[test]
    fn test_entry_points_dispatch_translated_level() {
        let (log, backend) = logger("debug");
        log.debug("d");
        log.info("i");
        log.notice("n");
        log.warning("w");
        log.error("e");
        log.critical("c");
        log.alert("a");
        log.emergency("em");

        let levels: Vec<BackendLevel> = backend.calls().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            levels,
            vec![
                BackendLevel::Debug,
                BackendLevel::Info,
                BackendLevel::Verbose,
                BackendLevel::Warn,
                BackendLevel::Error,
                BackendLevel::Error,
                BackendLevel::Error,
                BackendLevel::Error,
            ]
        );
        let sources: Vec<Severity> = backend.records().iter().map(|r| r.level()).collect();
        assert_eq!(sources, Severity::ALL.to_vec());
    }

    #[test]
    fn test_gate_suppresses_before_backend() {
        let (log, backend) = logger("error");
        log.warning("nope");
        log.info(json!({"big": "payload"}));
        assert!(backend.is_empty());

        log.critical("yes");
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn test_call_site_is_the_caller() {
        let (log, backend) = logger("debug");
        let line = line!() + 1;
        log.info("where am I");
        let record = &backend.records()[0];
        assert!(record.file().unwrap().ends_with("logger.rs"));
        assert_eq!(record.line().unwrap(), line.to_string());
    }

    #[test]
    fn test_unknown_level_logs_everything() {
        let (log, backend) = logger("chatty");
        assert_eq!(log.minimum_level(), Severity::Debug);
        log.debug("still here");
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn test_hostname_override() {
        let (log, backend) = logger("info");
        log.info("x");
        assert_eq!(log.hostname(), "unit");
        assert_eq!(backend.records()[0].hostname(), "unit");
    }

    #[test]
    fn test_debug_impl() {
        let (log, _) = logger("notice");
        let s = format!("{:?}", log);
        assert!(s.contains("Notice"));
        assert!(s.contains("MemoryBackend"));
    }
}
