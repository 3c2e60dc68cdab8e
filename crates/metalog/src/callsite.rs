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

//! Call-site metadata.
//!
//! A [`CallPosition`] provider turns the caller's location into a position
//! string of the form `" [file:line] "`, and [`parse_position`] splits that
//! string back into a [`CallSite`]. The two halves are kept apart so custom
//! providers (for example ones that report a logical component instead of a
//! source file) only need to produce the string.

use std::fmt::Debug;
use std::panic::Location;

/// File and line of a log call, as they appear in the record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Source file
    pub file: String,
    /// Line number, kept as text
    pub line: String,
}

/// Source of position strings for log calls
pub trait CallPosition: Send + Sync + Debug {
    /// Position string for a call made at `location`, if one is known
    fn position(&self, location: &'static Location<'static>) -> Option<String>;
}

/// Reports the `#[track_caller]` location of the logging call
#[derive(Debug, Clone, Copy, Default)]
pub struct CallerLocation;

impl CallPosition for CallerLocation {
    fn position(&self, location: &'static Location<'static>) -> Option<String> {
        Some(format!(" [{}:{}] ", location.file(), location.line()))
    }
}

/// Never reports a position; records carry no `file`/`line`
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPosition;

impl CallPosition for NoPosition {
    fn position(&self, _location: &'static Location<'static>) -> Option<String> {
        None
    }
}

/// Split a position string into file and line.
///
/// The file is the text before the first `:` with a leading `" ["` removed;
/// the line is the text between the first and second `:` with a trailing
/// `"] "` removed. Returns `None` when either part is missing or empty.
pub fn parse_position(position: &str) -> Option<CallSite> {
    let mut parts = position.split(':');
    let file = parts.next()?.replacen(" [", "", 1);
    let line = parts.next()?.replacen("] ", "", 1);

    if file.is_empty() || line.is_empty() {
        return None;
    }
    Some(CallSite { file, line })
}

/// Resolve the call site for `location` through `provider`
pub fn resolve(
    provider: &dyn CallPosition,
    location: &'static Location<'static>,
) -> Option<CallSite> {
    provider.position(location).as_deref().and_then(parse_position)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bracketed_position() {
        let site = parse_position(" [src/server.rs:118] ").unwrap();
        assert_eq!(site.file, "src/server.rs");
        assert_eq!(site.line, "118");
    }

    #[test]
    fn test_parse_ignores_column() {
        let site = parse_position(" [lib/db.rs:42:7] ").unwrap();
        assert_eq!(site.file, "lib/db.rs");
        assert_eq!(site.line, "42");
    }

    #[test]
    fn test_parse_without_brackets() {
        let site = parse_position("main.rs:9").unwrap();
        assert_eq!(site.file, "main.rs");
        assert_eq!(site.line, "9");
    }

    #[test]
    fn test_malformed_positions() {
        assert!(parse_position("").is_none());
        assert!(parse_position(" [no-separator] ").is_none());
        assert!(parse_position(":12").is_none());
        assert!(parse_position(" [file.rs:] ").is_none());
    }

    #[test]
    fn test_caller_location_round_trips() {
        let location = Location::caller();
        let site = resolve(&CallerLocation, location).unwrap();
        assert!(site.file.ends_with("callsite.rs"));
        assert_eq!(site.line, location.line().to_string());
    }

    #[test]
    fn test_no_position() {
        assert!(resolve(&NoPosition, Location::caller()).is_none());
    }
}
