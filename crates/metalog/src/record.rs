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

//! Log records and the normalizer that builds them.
//!
//! Every call that passes the gate becomes one [`LogRecord`], serialized as
//!
//! ```text
//! { "timestamp": "2026-10-16T09:30:00.123Z", "hostname": "web-1",
//!   "level": "warning", "file": "src/api.rs", "line": "88",
//!   "message": "retrying", "caption": "Upstream" }
//! ```
//!
//! `file`/`line` and `caption` are omitted when unknown, never null.

use crate::callsite::{self, CallPosition};
use crate::gate::LevelGate;
use crate::severity::Severity;
use crate::shape::CallShape;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::panic::Location;
use std::sync::Arc;

/// One normalized log call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    timestamp: String,
    hostname: String,
    level: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    line: Option<String>,
    message: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
}

impl LogRecord {
    /// ISO-8601 UTC timestamp with millisecond precision
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Host that produced the record
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Severity the caller logged at (not the backend level)
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Source file of the call, if known
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Source line of the call, if known
    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }

    /// Message: a string, or the structured value passed by the caller
    pub fn message(&self) -> &Value {
        &self.message
    }

    /// Message as text; structured messages are rendered as compact JSON
    pub fn message_text(&self) -> String {
        match &self.message {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Caption, if the call had a non-empty one
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Serialize as a single JSON line
    pub fn to_json(&self) -> String {
        // A record only holds strings and JSON values, so this cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Builds records for one logger: gate, hostname and call-site provider.
#[derive(Debug, Clone)]
pub struct Normalizer {
    gate: LevelGate,
    hostname: String,
    call_position: Arc<dyn CallPosition>,
}

impl Normalizer {
    /// Create a normalizer
    pub fn new(
        gate: LevelGate,
        hostname: impl Into<String>,
        call_position: Arc<dyn CallPosition>,
    ) -> Self {
        Normalizer {
            gate,
            hostname: hostname.into(),
            call_position,
        }
    }

    /// The gate this normalizer consults
    pub fn gate(&self) -> LevelGate {
        self.gate
    }

    /// Hostname stamped on every record
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Build the record for a call, or `None` when the gate suppresses it.
    ///
    /// `shape` is only converted after the gate check, so suppressed calls
    /// never pay for message formatting.
    pub fn normalize(
        &self,
        severity: Severity,
        shape: impl Into<CallShape>,
        location: &'static Location<'static>,
    ) -> Option<LogRecord> {
        if !self.gate.is_enabled(severity) {
            return None;
        }

        let shaped = shape.into().into_message();
        let (file, line) = callsite::resolve(self.call_position.as_ref(), location)
            .map(|site| (site.file, site.line))
            .unzip();

        Some(LogRecord {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            hostname: self.hostname.clone(),
            level: severity,
            file,
            line,
            message: shaped.message,
            caption: shaped.caption.filter(|c| !c.is_empty()),
        })
    }
}

/// Hostname of the current machine, `localhost` when the OS reports none
pub fn local_hostname() -> String {
    let name = gethostname::gethostname().to_string_lossy().into_owned();
    if name.is_empty() {
        "localhost".to_string()
    } else {
        name
    }
}
