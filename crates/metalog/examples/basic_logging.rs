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

//! Basic logging example demonstrating the bridges.
//!
//! Run with: NODE_LOGGER_LEVEL=debug cargo run --example basic_logging -- <backend> [format]
//! Where <backend> is one of: console, json, tracing
//! and [format] is one of: pretty, compact, json

use metalog::bridges::tracing_adapter::init_tracing;
use metalog::{BackendKind, LogFormat, Logger, LoggerConfig};
use serde_json::json;
use std::env;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let backend: BackendKind = args.get(1).map(|s| s.as_str()).unwrap_or("console").parse()?;
    let format: LogFormat = args.get(2).map(|s| s.as_str()).unwrap_or("pretty").parse()?;

    let config = LoggerConfig::new()
        .with_backend(backend)
        .with_format(format)
        .with_console_level("debug");

    if backend == BackendKind::Tracing {
        init_tracing(&config)?;
    }

    let logger = Logger::builder().config(config).level("debug").build()?;

    metalog::info!(logger, "Application started");
    metalog::debug!(logger, "This is a debug message");
    metalog::notice!(logger, "Config", json!({"workers": 4, "listen": "0.0.0.0:8080"}));
    metalog::warning!(logger, "Pool", "only %d of %d workers ready", 3, 4);

    let result = process_file(&logger, "/path/to/file");
    metalog::info!(logger, "Result", result);

    metalog::critical!(logger, "Storage", "%s unreachable after %d attempts", "s3", 5);
    Ok(())
}

fn process_file(logger: &Logger, path: &str) -> String {
    metalog::debug!(logger, "Process", "starting %s", path);
    let result = format!("Processed: {}", path);
    metalog::debug!(logger, "Process", "done: %j", json!({"path": path, "ok": true}));
    result
}
