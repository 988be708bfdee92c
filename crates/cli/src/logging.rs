// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup for the binary.
//!
//! Events go to stderr so they never mix with the rendered row on stdout.

use std::io::IsTerminal;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use crate::env;

/// Install the global subscriber, filtered by `PAGENATION_LOG`.
pub fn init_logging() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(env::log_filter().as_deref()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init()
}

/// Build a filter from a directive, falling back to the default level when
/// the directive is missing or invalid.
pub fn env_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(env::DEFAULT_LOG_FILTER))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
