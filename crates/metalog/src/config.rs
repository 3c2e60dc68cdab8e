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

//! Configuration for loggers and their bridges.
//!
//! A [`LoggerConfig`] is built once at startup and handed to
//! [`LoggerBuilder::config`](crate::LoggerBuilder::config). It derives
//! `serde` so applications can embed it in their own configuration files.

use crate::bridges::BackendKind;
use crate::error::LogError;
use crate::severity::{to_backend_level, BackendLevel, Severity};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variable consulted when no level is configured explicitly
pub const LEVEL_ENV_VAR: &str = "NODE_LOGGER_LEVEL";

/// Level used when neither configuration nor environment sets one
pub const DEFAULT_LEVEL: &str = "debug";

/// Line format of the console bridge
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Timestamp, level, caption, message and call site on one line
    #[default]
    Pretty,

    /// Level, caption and message only
    Compact,

    /// The record as a JSON document
    Json,
}

impl FromStr for LogFormat {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(LogError::ConfigError(format!(
                "Unknown format: {}. Expected one of: pretty, compact, json",
                s
            ))),
        }
    }
}

/// Output stream of the console and JSON bridges
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// Write to standard error
    #[default]
    Stderr,

    /// Write to standard output
    Stdout,
}

/// Configuration for a logger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum severity name for the logger's gate.
    /// If None, taken from `NODE_LOGGER_LEVEL`, then `debug`.
    pub level: Option<String>,

    /// Bridge built when no backend instance is supplied
    pub backend: BackendKind,

    /// Console line format
    pub format: LogFormat,

    /// Output stream for console and JSON bridges
    pub output: LogOutput,

    /// Whether the console bridge colors level names
    pub use_color: bool,

    /// Whether the pretty console format prints timestamps
    pub use_timestamps: bool,

    /// Threshold of the console bridge itself, in backend or severity
    /// vocabulary. If None, taken from `NODE_LOGGER_LEVEL`, then `debug`.
    pub console_level: Option<String>,

    /// Hostname stamped on records. If None, the machine's hostname.
    pub hostname: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            level: None,
            backend: BackendKind::Console,
            format: LogFormat::Pretty,
            output: LogOutput::Stderr,
            use_color: true,
            use_timestamps: true,
            console_level: None,
            hostname: None,
        }
    }
}

impl LoggerConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum severity
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Set the bridge to build
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Set the console format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the output stream
    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    /// Enable or disable colored level names
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Enable or disable timestamps in pretty output
    pub fn with_timestamps(mut self, use_timestamps: bool) -> Self {
        self.use_timestamps = use_timestamps;
        self
    }

    /// Set the console bridge's own threshold
    pub fn with_console_level(mut self, level: impl Into<String>) -> Self {
        self.console_level = Some(level.into());
        self
    }

    /// Override the hostname stamped on records
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Get the effective gate level from config or environment
    pub fn get_effective_level(&self) -> String {
        self.level
            .clone()
            .or_else(|| std::env::var(LEVEL_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
    }

    /// Get the console bridge threshold from config or environment.
    ///
    /// Accepts backend names (`warn`, `verbose`) as well as severity names
    /// (`warning`, `notice`), which are translated. Anything else falls back
    /// to `debug`.
    pub fn get_console_level(&self) -> BackendLevel {
        let raw = self
            .console_level
            .clone()
            .or_else(|| std::env::var(LEVEL_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());
        parse_backend_threshold(&raw)
    }
}

fn parse_backend_threshold(raw: &str) -> BackendLevel {
    if let Ok(level) = raw.parse::<BackendLevel>() {
        return level;
    }
    match raw.parse::<Severity>() {
        Ok(severity) => to_backend_level(severity),
        Err(_) => {
            tracing::warn!(level = raw, "unrecognized console level, using debug");
            BackendLevel::Debug
        }
    }
}
