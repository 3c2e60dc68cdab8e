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
#![allow(clippy::unwrap_used)]
//! Property-based tests for the gate and severity translation
//!
//! - Gate decisions follow rank order for every pair of severities
//! - The logger's backend call count agrees with the gate
//! - Translation never panics, and unknown names land on `debug`

use metalog::bridges::MemoryBackend;
use metalog::callsite::parse_position;
use metalog::{
    should_log, should_log_named, to_backend_level, to_backend_level_named, BackendLevel, Logger,
    Severity,
};
use proptest::prelude::*;
use std::sync::Arc;

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

#[test]
fn proptest_gate_matches_rank_order() {
    proptest!(|(candidate in arb_severity(), configured in arb_severity())| {
        prop_assert_eq!(should_log(candidate, configured), candidate.rank() >= configured.rank());
        prop_assert_eq!(
            should_log_named(candidate.as_str(), configured.as_str()),
            should_log(candidate, configured)
        );
    });
}

#[test]
fn proptest_logger_emits_iff_gate_allows() {
    proptest!(|(candidate in arb_severity(), configured in arb_severity())| {
        let backend = MemoryBackend::new();
        let logger = Logger::builder()
            .level(configured.as_str())
            .hostname("prop")
            .backend(Arc::new(backend.clone()))
            .build()
            .unwrap();

        logger.log(candidate, "probe");

        let expected = usize::from(candidate >= configured);
        prop_assert_eq!(backend.len(), expected);
        if expected == 1 {
            prop_assert_eq!(backend.calls()[0].0, to_backend_level(candidate));
        }
    });
}

#[test]
fn proptest_unknown_names_translate_to_debug() {
    proptest!(|(name in "[a-zA-Z]{0,12}")| {
        let level = to_backend_level_named(&name);
        match Severity::from_name(&name) {
            Some(severity) => prop_assert_eq!(level, to_backend_level(severity)),
            None => prop_assert_eq!(level, BackendLevel::Debug),
        }
    });
}

#[test]
fn proptest_position_parsing_never_panics() {
    proptest!(|(position in ".{0,40}")| {
        if let Some(site) = parse_position(&position) {
            prop_assert!(!site.file.is_empty());
            prop_assert!(!site.line.is_empty());
        }
    });
}
