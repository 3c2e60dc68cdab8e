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

//! Severity vocabularies and the translation between them.
//!
//! Callers log with the eight syslog-style [`Severity`] levels. Backends only
//! understand the five [`BackendLevel`]s, so every record is translated with
//! [`to_backend_level`] right before dispatch.

use crate::error::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Caller-facing severity, ordered from least to most severe
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Detailed diagnostic output
    #[default]
    Debug,
    /// Routine operational messages
    Info,
    /// Normal but significant conditions
    Notice,
    /// Something unexpected that does not stop the operation
    Warning,
    /// An operation failed
    Error,
    /// A component is unusable
    Critical,
    /// Action must be taken immediately
    Alert,
    /// The system is unusable
    Emergency,
}

impl Severity {
    /// All severities, least severe first
    pub const ALL: [Severity; 8] = [
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Alert,
        Severity::Emergency,
    ];

    /// Lowercase name used in records and configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Notice => "notice",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
            Severity::Alert => "alert",
            Severity::Emergency => "emergency",
        }
    }

    /// Position in the total order, `debug` = 0
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Look up a severity by its exact name
    pub fn from_name(name: &str) -> Option<Severity> {
        Severity::ALL.into_iter().find(|s| s.as_str() == name)
    }

    /// Rank of a severity name; unrecognized names rank 0
    pub fn rank_of(name: &str) -> u8 {
        Severity::from_name(name).map_or(0, |s| s.rank())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::from_name(&s.trim().to_lowercase())
            .ok_or_else(|| LogError::InvalidLogLevel(s.to_string()))
    }
}

/// Level vocabulary understood by backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendLevel {
    /// Failures of any kind
    Error,
    /// Warnings
    Warn,
    /// Informational messages
    Info,
    /// Significant but normal events
    Verbose,
    /// Diagnostics
    Debug,
}

impl BackendLevel {
    /// Lowercase name of the backend method this level dispatches to
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendLevel::Error => "error",
            BackendLevel::Warn => "warn",
            BackendLevel::Info => "info",
            BackendLevel::Verbose => "verbose",
            BackendLevel::Debug => "debug",
        }
    }

    /// Whether a record at `self` passes a backend threshold of `threshold`.
    ///
    /// Backend levels are ordered most severe first, so `error` passes every
    /// threshold and `debug` only passes a `debug` threshold.
    pub fn passes(&self, threshold: BackendLevel) -> bool {
        *self <= threshold
    }
}

impl fmt::Display for BackendLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(BackendLevel::Error),
            "warn" => Ok(BackendLevel::Warn),
            "info" => Ok(BackendLevel::Info),
            "verbose" => Ok(BackendLevel::Verbose),
            "debug" => Ok(BackendLevel::Debug),
            _ => Err(LogError::InvalidLogLevel(s.to_string())),
        }
    }
}

/// Translate a severity into the backend vocabulary
pub fn to_backend_level(severity: Severity) -> BackendLevel {
    match severity {
        Severity::Emergency | Severity::Alert | Severity::Critical | Severity::Error => {
            BackendLevel::Error
        }
        Severity::Warning => BackendLevel::Warn,
        Severity::Notice => BackendLevel::Verbose,
        Severity::Info => BackendLevel::Info,
        Severity::Debug => BackendLevel::Debug,
    }
}

/// Translate a severity name; unrecognized names map to `debug`
pub fn to_backend_level_named(name: &str) -> BackendLevel {
    Severity::from_name(name).map_or(BackendLevel::Debug, to_backend_level)
}
