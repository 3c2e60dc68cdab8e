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

//! In-memory bridge for testing
//!
//! Clones share the same buffer, so a test can hand one clone to the logger
//! and inspect the other.
//!
//! ```rust
//! use metalog::{bridges::MemoryBackend, BackendLevel, Logger};
//! use std::sync::Arc;
//!
//! let backend = MemoryBackend::new();
//! let logger = Logger::builder()
//!     .level("info")
//!     .backend(Arc::new(backend.clone()))
//!     .build()
//!     .unwrap();
//!
//! logger.warning("disk almost full");
//! logger.debug("suppressed");
//!
//! assert_eq!(backend.len(), 1);
//! assert_eq!(backend.calls()[0].0, BackendLevel::Warn);
//! ```

use super::Backend;
use crate::record::LogRecord;
use crate::severity::BackendLevel;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Captures every `(backend level, record)` pair it receives
#[derive(Clone, Default)]
pub struct MemoryBackend {
    calls: Arc<Mutex<Vec<(BackendLevel, LogRecord)>>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, Vec<(BackendLevel, LogRecord)>> {
        match self.calls.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Every call received so far, oldest first
    pub fn calls(&self) -> Vec<(BackendLevel, LogRecord)> {
        self.entries().clone()
    }

    /// Records received so far, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.entries().iter().map(|(_, r)| r.clone()).collect()
    }

    /// Number of calls received at `level`
    pub fn count(&self, level: BackendLevel) -> usize {
        self.entries().iter().filter(|(l, _)| *l == level).count()
    }

    /// Number of calls received
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether nothing has been received
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Forget everything received
    pub fn clear(&self) {
        self.entries().clear();
    }
}

impl fmt::Debug for MemoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryBackend")
            .field("calls", &self.len())
            .finish()
    }
}

impl Backend for MemoryBackend {
    fn emit(&self, level: BackendLevel, record: &LogRecord) {
        self.entries().push((level, record.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use crate::test_support::record;

    #[test]
    fn test_new_is_empty() {
        let backend = MemoryBackend::new();
        assert!(backend.is_empty());
        assert_eq!(backend.len(), 0);
    }

    #[test]
    fn test_clones_share_buffer() {
        let backend = MemoryBackend::new();
        let handle = backend.clone();
        backend.verbose(&record(Severity::Notice, "n"));
        backend.verbose(&record(Severity::Notice, "m"));
        backend.error(&record(Severity::Critical, "c"));

        assert_eq!(handle.len(), 3);
        assert_eq!(handle.count(BackendLevel::Verbose), 2);
        assert_eq!(handle.records()[2].level(), Severity::Critical);

        handle.clear();
        assert!(backend.is_empty());
    }

    #[test]
    fn test_debug_output() {
        let debug_str = format!("{:?}", MemoryBackend::new());
        assert!(debug_str.contains("MemoryBackend"));
    }
}
