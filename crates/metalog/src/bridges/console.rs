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

//! Terminal bridge.
//!
//! The default backend. It has its own threshold, independent from the
//! logger's gate, sourced from `NODE_LOGGER_LEVEL` unless configured.
//!
//! ```text
//! 2026-10-16T09:30:00.123Z warn: [Upstream] retrying (src/api.rs:88)
//! ```

use super::Backend;
use crate::config::{LogFormat, LogOutput, LoggerConfig};
use crate::record::LogRecord;
use crate::severity::BackendLevel;
use console::style;
use std::io::{self, Write};

/// Writes records to stderr or stdout
#[derive(Debug, Clone)]
pub struct ConsoleBackend {
    threshold: BackendLevel,
    format: LogFormat,
    output: LogOutput,
    use_color: bool,
    use_timestamps: bool,
}

impl ConsoleBackend {
    /// Console bridge with default settings and the environment threshold
    pub fn new() -> Self {
        Self::from_config(&LoggerConfig::default())
    }

    /// Console bridge for a configuration
    pub fn from_config(config: &LoggerConfig) -> Self {
        ConsoleBackend {
            threshold: config.get_console_level(),
            format: config.format,
            output: config.output,
            use_color: config.use_color,
            use_timestamps: config.use_timestamps,
        }
    }

    /// Override the threshold
    pub fn with_threshold(mut self, threshold: BackendLevel) -> Self {
        self.threshold = threshold;
        self
    }

    /// The bridge's own threshold
    pub fn threshold(&self) -> BackendLevel {
        self.threshold
    }

    /// Render one line, without the trailing newline
    pub fn render(&self, level: BackendLevel, record: &LogRecord) -> String {
        if self.format == LogFormat::Json {
            return record.to_json();
        }

        let mut line = String::new();
        if self.format == LogFormat::Pretty && self.use_timestamps {
            line.push_str(record.timestamp());
            line.push(' ');
        }
        line.push_str(&self.paint(level));
        line.push(':');
        if let Some(caption) = record.caption() {
            line.push_str(" [");
            line.push_str(caption);
            line.push(']');
        }
        line.push(' ');
        line.push_str(&record.message_text());

        if self.format == LogFormat::Pretty {
            if let (Some(file), Some(number)) = (record.file(), record.line()) {
                line.push_str(&format!(" ({}:{})", file, number));
            }
        }
        line
    }

    fn paint(&self, level: BackendLevel) -> String {
        let name = level.as_str();
        if !self.use_color {
            return name.to_string();
        }
        let styled = match level {
            BackendLevel::Error => style(name).red().bold(),
            BackendLevel::Warn => style(name).yellow(),
            BackendLevel::Info => style(name).green(),
            BackendLevel::Verbose => style(name).cyan(),
            BackendLevel::Debug => style(name).blue(),
        };
        styled.to_string()
    }
}

impl Default for ConsoleBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for ConsoleBackend {
    fn emit(&self, level: BackendLevel, record: &LogRecord) {
        if !level.passes(self.threshold) {
            return;
        }
        let line = self.render(level, record);
        // A closed terminal is not the caller's problem
        let _ = match self.output {
            LogOutput::Stderr => writeln!(io::stderr().lock(), "{}", line),
            LogOutput::Stdout => writeln!(io::stdout().lock(), "{}", line),
        };
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use crate::test_support::{captioned_record, record};

    fn plain(format: LogFormat) -> ConsoleBackend {
        ConsoleBackend::from_config(
            &LoggerConfig::new()
                .with_format(format)
                .with_color(false)
                .with_console_level("debug"),
        )
    }

    #[test]
    fn test_compact_line() {
        let backend = plain(LogFormat::Compact);
        let rec = captioned_record(Severity::Warning, "Db", "slow");
        assert_eq!(backend.render(BackendLevel::Warn, &rec), "warn: [Db] 'slow'");
    }

    #[test]
    fn test_pretty_line_has_timestamp() {
        let backend = plain(LogFormat::Pretty);
        let rec = record(Severity::Info, "ready");
        let line = backend.render(BackendLevel::Info, &rec);
        assert!(line.starts_with(rec.timestamp()));
        assert!(line.ends_with("info: ready"));
    }

    #[test]
    fn test_json_line_is_the_record() {
        let backend = plain(LogFormat::Json);
        let rec = record(Severity::Notice, "n");
        let line = backend.render(BackendLevel::Verbose, &rec);
        let parsed: LogRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, rec);
    }

    #[test]
    fn test_structured_message_rendered_as_json() {
        let backend = plain(LogFormat::Compact);
        let rec = crate::test_support::value_record(Severity::Info, serde_json::json!({"id": 3}));
        assert_eq!(backend.render(BackendLevel::Info, &rec), "info: {\"id\":3}");
    }

    #[test]
    fn test_threshold_override() {
        let backend = plain(LogFormat::Compact).with_threshold(BackendLevel::Warn);
        assert_eq!(backend.threshold(), BackendLevel::Warn);
        assert!(!BackendLevel::Info.passes(backend.threshold()));
    }
}
