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

//! Metalog: leveled logging façade
//!
//! Normalizes log calls into one JSON record shape and forwards them to a
//! pluggable backend.
//!
//! # Features
//!
//! - **Eight severities**: `debug` through `emergency`, gated by a minimum
//!   level fixed at construction
//! - **Uniform records**: timestamp, hostname, level, call site, message and
//!   optional caption
//! - **Call shapes**: bare values, captioned values and captioned printf-style
//!   messages, chosen by the number of macro arguments
//! - **Bridges**: console, JSON lines, in-memory and `tracing` backends, each
//!   receiving one of five backend levels
//!
//! # Example
//!
//! ```rust,no_run
//! use metalog::{Logger, LoggerConfig, LogFormat};
//!
//! fn main() -> Result<(), metalog::LogError> {
//!     let logger = Logger::builder()
//!         .config(LoggerConfig::new().with_format(LogFormat::Json))
//!         .level("info")
//!         .build()?;
//!
//!     metalog::info!(logger, "listening");
//!     metalog::warning!(logger, "Pool", "only %d of %d workers up", 3, 8);
//!     metalog::debug!(logger, "not emitted at info");
//!     Ok(())
//! }
//! ```

pub mod bridges;
pub mod callsite;
pub mod config;
pub mod error;
pub mod format;
pub mod gate;
pub mod logger;
pub mod macros;
pub mod record;
pub mod severity;
pub mod shape;

pub use bridges::{Backend, BackendKind};
pub use callsite::{CallPosition, CallSite};
pub use config::{LogFormat, LogOutput, LoggerConfig};
pub use error::{LogError, LogResult};
pub use gate::{should_log, should_log_named, LevelGate};
pub use logger::{Logger, LoggerBuilder};
pub use record::LogRecord;
pub use severity::{to_backend_level, to_backend_level_named, BackendLevel, Severity};
pub use shape::{to_value, CallShape};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::callsite::NoPosition;
    use crate::gate::LevelGate;
    use crate::record::{LogRecord, Normalizer};
    use crate::severity::Severity;
    use crate::shape::CallShape;
    use serde_json::Value;
    use std::panic::Location;
    use std::sync::Arc;

    fn normalize(severity: Severity, shape: CallShape) -> LogRecord {
        Normalizer::new(LevelGate::default(), "test-host", Arc::new(NoPosition))
            .normalize(severity, shape, Location::caller())
            .unwrap_or_else(|| panic!("debug gate suppressed {severity}"))
    }

    /// Record with a plain string message
    pub fn record(severity: Severity, message: &str) -> LogRecord {
        normalize(severity, CallShape::from(message))
    }

    /// Record with a caption; the message is the inspected string
    pub fn captioned_record(severity: Severity, caption: &str, message: &str) -> LogRecord {
        normalize(severity, CallShape::from((caption, message)))
    }

    /// Record whose message is a structured value
    pub fn value_record(severity: Severity, value: Value) -> LogRecord {
        normalize(severity, CallShape::Bare(value))
    }
}
