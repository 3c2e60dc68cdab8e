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

//! Variadic logging macros.
//!
//! The number of arguments after the logger picks the call shape:
//!
//! ```ignore
//! metalog::info!(log);                              // empty message
//! metalog::info!(log, "user signed in");            // bare value
//! metalog::info!(log, "Session", session);          // caption + inspected value
//! metalog::info!(log, "Session", "id=%s ttl=%d", id, ttl); // caption + format
//! ```
//!
//! Arguments may be anything that implements `serde::Serialize`. They are
//! only evaluated and serialized when the logger's gate lets the severity
//! through. A falsy caption (`false`, `0`, `null`, `""`) is dropped from the
//! record.

#[doc(hidden)]
#[macro_export]
macro_rules! __metalog_call {
    ($logger:expr, $severity:expr) => {{
        let logger = &$logger;
        logger.log($severity, $crate::CallShape::Empty)
    }};
    ($logger:expr, $severity:expr, $value:expr $(,)?) => {{
        let logger = &$logger;
        if logger.is_enabled($severity) {
            logger.log($severity, $crate::CallShape::Bare($crate::to_value(&$value)))
        }
    }};
    ($logger:expr, $severity:expr, $caption:expr, $value:expr $(,)?) => {{
        let logger = &$logger;
        if logger.is_enabled($severity) {
            logger.log(
                $severity,
                $crate::CallShape::Captioned(
                    $crate::shape::caption_text(&$caption),
                    $crate::to_value(&$value),
                ),
            )
        }
    }};
    ($logger:expr, $severity:expr, $caption:expr, $template:expr, $($arg:expr),+ $(,)?) => {{
        let logger = &$logger;
        if logger.is_enabled($severity) {
            logger.log(
                $severity,
                $crate::CallShape::CaptionedFormatted(
                    $crate::shape::caption_text(&$caption),
                    $crate::to_value(&$template),
                    ::std::vec![$($crate::to_value(&$arg)),+],
                ),
            )
        }
    }};
}

/// Log at `debug`
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $($arg:tt)+)?) => {
        $crate::__metalog_call!($logger, $crate::Severity::Debug $(, $($arg)+)?)
    };
}

/// Log at `info`
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $($arg:tt)+)?) => {
        $crate::__metalog_call!($logger, $crate::Severity::Info $(, $($arg)+)?)
    };
}

/// Log at `notice`
#[macro_export]
macro_rules! notice {
    ($logger:expr $(, $($arg:tt)+)?) => {
        $crate::__metalog_call!($logger, $crate::Severity::Notice $(, $($arg)+)?)
    };
}

/// Log at `warning`
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $($arg:tt)+)?) => {
        $crate::__metalog_call!($logger, $crate::Severity::Warning $(, $($arg)+)?)
    };
}

/// Log at `error`
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $($arg:tt)+)?) => {
        $crate::__metalog_call!($logger, $crate::Severity::Error $(, $($arg)+)?)
    };
}

/// Log at `critical`
#[macro_export]
macro_rules! critical {
    ($logger:expr $(, $($arg:tt)+)?) => {
        $crate::__metalog_call!($logger, $crate::Severity::Critical $(, $($arg)+)?)
    };
}

/// Log at `alert`
#[macro_export]
macro_rules! alert {
    ($logger:expr $(, $($arg:tt)+)?) => {
        $crate::__metalog_call!($logger, $crate::Severity::Alert $(, $($arg)+)?)
    };
}

/// Log at `emergency`
#[macro_export]
macro_rules! emergency {
    ($logger:expr $(, $($arg:tt)+)?) => {
        $crate::__metalog_call!($logger, $crate::Severity::Emergency $(, $($arg)+)?)
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::bridges::MemoryBackend;
    use crate::Logger;
    use serde_json::json;
    use std::sync::Arc;

    fn logger(level: &str) -> (Logger, MemoryBackend) {
        let backend = MemoryBackend::new();
        let logger = Logger::builder()
            .level(level)
            .hostname("macro-test")
            .backend(Arc::new(backend.clone()))
            .build()
            .unwrap();
        (logger, backend)
    }

    #[test]
    fn test_each_arity() {
        let (log, backend) = logger("debug");
        crate::info!(log);
        crate::info!(log, "plain");
        crate::info!(log, "Ctx", json!({"a": 1}));
        crate::info!(log, "Ctx", "val=%d", 5);

        let records = backend.records();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].message(), &json!(""));
        assert_eq!(records[1].message(), &json!("plain"));
        assert!(records[1].caption().is_none());
        assert_eq!(records[2].caption(), Some("Ctx"));
        assert_eq!(records[2].message(), &json!("{ a: 1 }"));
        assert_eq!(records[3].message(), &json!("val=5"));
    }

    #[test]
    fn test_trailing_comma_and_many_args() {
        let (log, backend) = logger("debug");
        crate::warning!(log, "Job", "%s finished in %dms", "export", 42, "extra",);
        assert_eq!(
            backend.records()[0].message(),
            &json!("export finished in 42ms extra")
        );
    }

    #[test]
    fn test_falsy_caption_is_dropped() {
        let (log, backend) = logger("debug");
        crate::info!(log, 0, "zero");
        crate::info!(log, false, "n=%d", 1);
        crate::info!(log, 5, "five");

        let records = backend.records();
        assert!(records[0].caption().is_none());
        assert_eq!(records[0].message(), &json!("'zero'"));
        assert!(records[1].caption().is_none());
        assert_eq!(records[1].message(), &json!("n=1"));
        assert_eq!(records[2].caption(), Some("5"));
    }

    #[test]
    fn test_macro_records_invocation_line() {
        let (log, backend) = logger("debug");
        let line = line!() + 1;
        crate::notice!(log, "here");
        assert_eq!(backend.records()[0].line(), Some(line.to_string().as_str()));
    }
}
