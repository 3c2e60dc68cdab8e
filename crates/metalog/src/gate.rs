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

//! Minimum-severity gate.

use crate::severity::Severity;

/// Whether `candidate` is at least as severe as `configured`
pub fn should_log(candidate: Severity, configured: Severity) -> bool {
    candidate.rank() >= configured.rank()
}

/// Name-based variant of [`should_log`].
///
/// Unrecognized names rank 0, so an unknown candidate is never dropped by a
/// `debug` gate and an unknown configured level lets everything through.
pub fn should_log_named(candidate: &str, configured: &str) -> bool {
    Severity::rank_of(candidate) >= Severity::rank_of(configured)
}

/// The configured minimum severity of one logger.
///
/// Fixed at construction; the logger only ever reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelGate {
    minimum: Severity,
}

impl LevelGate {
    /// Gate that lets `minimum` and everything more severe through
    pub fn new(minimum: Severity) -> Self {
        LevelGate { minimum }
    }

    /// Build a gate from a level name.
    ///
    /// Names are matched exactly, as in [`should_log_named`]: `"ERROR"` is
    /// unrecognized. Unrecognized names fall back to `debug` (rank 0).
    pub fn from_name(name: &str) -> Self {
        match Severity::from_name(name) {
            Some(minimum) => LevelGate { minimum },
            None => {
                tracing::warn!(level = name, "unrecognized log level, logging everything");
                LevelGate::default()
            }
        }
    }

    /// The configured minimum
    pub fn minimum(&self) -> Severity {
        self.minimum
    }

    /// Whether a call at `candidate` should be emitted
    pub fn is_enabled(&self, candidate: Severity) -> bool {
        should_log(candidate, self.minimum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gate_is_debug() {
        let gate = LevelGate::default();
        assert_eq!(gate.minimum(), Severity::Debug);
        assert!(Severity::ALL.iter().all(|s| gate.is_enabled(*s)));
    }

    #[test]
    fn test_error_gate() {
        let gate = LevelGate::new(Severity::Error);
        assert!(!gate.is_enabled(Severity::Warning));
        assert!(!gate.is_enabled(Severity::Debug));
        assert!(gate.is_enabled(Severity::Error));
        assert!(gate.is_enabled(Severity::Emergency));
    }

    #[test]
    fn test_named_unknown_candidate() {
        assert!(should_log_named("verbose", "debug"));
        assert!(!should_log_named("verbose", "info"));
    }

    #[test]
    fn test_named_unknown_configured_enables_all() {
        for s in Severity::ALL {
            assert!(should_log_named(s.as_str(), "loud"));
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(LevelGate::from_name("critical").minimum(), Severity::Critical);
        assert_eq!(LevelGate::from_name("nonsense").minimum(), Severity::Debug);
    }

    #[test]
    fn test_from_name_agrees_with_named_check() {
        for configured in ["ERROR", " error", "Warning", "alert", "verbose"] {
            let gate = LevelGate::from_name(configured);
            for candidate in Severity::ALL {
                assert_eq!(
                    gate.is_enabled(candidate),
                    should_log_named(candidate.as_str(), configured),
                    "{configured} vs {candidate}"
                );
            }
        }
    }
}
