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

//! Error types for logger construction and configuration.
//!
//! Only construction can fail. Once a [`Logger`](crate::Logger) exists, every
//! entry point accepts every call shape and never returns an error.

use thiserror::Error;

/// Errors that can occur while configuring or building a logger
#[derive(Error, Debug)]
pub enum LogError {
    /// A level name outside the eight severities (or five backend levels)
    #[error("Invalid log level: {0}. Expected one of: debug, info, notice, warning, error, critical, alert, emergency")]
    InvalidLogLevel(String),

    /// A backend name with no matching bridge
    #[error("Unknown backend: {0}. Expected one of: console, json, tracing")]
    UnknownBackend(String),

    /// The bridge exists but was compiled out
    #[error("Backend '{backend}' is not available in this build: {hint}")]
    BackendUnavailable {
        /// Name of the bridge
        backend: String,
        /// How to get it back
        hint: String,
    },

    /// Invalid configuration, or the bridge could not be set up
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl LogError {
    /// Build a [`LogError::BackendUnavailable`]
    pub fn backend_unavailable(backend: impl Into<String>, hint: impl Into<String>) -> Self {
        LogError::BackendUnavailable {
            backend: backend.into(),
            hint: hint.into(),
        }
    }

    /// Build a [`LogError::ConfigError`]
    pub fn config_error(message: impl Into<String>) -> Self {
        LogError::ConfigError(message.into())
    }
}

/// Result alias used across the crate
pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message_names_backend() {
        let err = LogError::backend_unavailable("tracing", "enable the `tracing-bridge` feature");
        let msg = err.to_string();
        assert!(msg.contains("'tracing'"));
        assert!(msg.contains("tracing-bridge"));
    }

    #[test]
    fn test_unknown_backend_lists_choices() {
        let msg = LogError::UnknownBackend("loggly".into()).to_string();
        assert!(msg.contains("loggly"));
        assert!(msg.contains("console, json, tracing"));
    }
}
