// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by pagenation are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

/// Default tracing filter when `PAGENATION_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// `PAGENATION_LOG` — tracing filter directive (e.g. `debug`, `pagenation=trace`).
pub fn log_filter() -> Option<String> {
    non_empty(names::PAGENATION_LOG)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
