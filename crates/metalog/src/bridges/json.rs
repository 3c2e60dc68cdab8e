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

//! JSON-lines bridge: one record per line, nothing else.

use super::Backend;
use crate::config::LogOutput;
use crate::record::LogRecord;
use crate::severity::BackendLevel;
use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

/// Writes every record as a JSON document followed by a newline
pub struct JsonBackend {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl JsonBackend {
    /// Write to an arbitrary sink
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        JsonBackend {
            sink: Mutex::new(Box::new(sink)),
        }
    }

    /// Write to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Write to standard error
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Write to the given output stream
    pub fn for_output(output: LogOutput) -> Self {
        match output {
            LogOutput::Stderr => Self::stderr(),
            LogOutput::Stdout => Self::stdout(),
        }
    }
}

impl fmt::Debug for JsonBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonBackend").finish()
    }
}

impl Backend for JsonBackend {
    fn emit(&self, _level: BackendLevel, record: &LogRecord) {
        let mut sink = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(sink, "{}", record.to_json()).and_then(|()| sink.flush());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use crate::test_support::record;
    use std::sync::Arc;

    /// Shared buffer so the test can read what the backend wrote
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_one_line_per_record() {
        let buf = SharedBuf::default();
        let backend = JsonBackend::new(buf.clone());
        backend.info(&record(Severity::Info, "first"));
        backend.error(&record(Severity::Alert, "second"));

        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["level"], "alert");
        assert_eq!(second["message"], "second");
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let backend = JsonBackend::new(BrokenPipe);
        backend.warn(&record(Severity::Warning, "nobody listening"));
    }
}
