//! Logging utilities for appwatch components.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::Result;

/// Initialize tracing with sensible defaults.
///
/// Uses the RUST_LOG environment variable to control log levels.
/// Default level is INFO.
pub fn init() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Initialize tracing with JSON formatting (useful for structured logging).
pub fn init_json() {
    tracing_subscriber::registry()
        .with(fmt::layer().json())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Initialize tracing with an explicit default level, output format and an
/// optional log file.
///
/// RUST_LOG still takes precedence over `default_level`. When `log_file` is
/// given, events are additionally appended to that file without ANSI codes.
pub fn init_with_options(default_level: &str, json: bool, log_file: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file = match log_file {
        Some(path) => Some(Arc::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        )),
        None => None,
    };

    if json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(file.map(|f| fmt::layer().with_ansi(false).with_writer(f)))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(file.map(|f| fmt::layer().with_ansi(false).with_writer(f)))
            .with(filter)
            .init();
    }

    Ok(())
}
