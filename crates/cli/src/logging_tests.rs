// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn missing_directive_uses_default_level() {
    assert_eq!(env_filter(None).to_string(), env::DEFAULT_LOG_FILTER);
}

#[test]
fn valid_directive_is_used() {
    assert_eq!(env_filter(Some("debug")).to_string(), "debug");
}

#[test]
fn invalid_directive_falls_back() {
    assert_eq!(
        env_filter(Some("pagenation=notalevel")).to_string(),
        env::DEFAULT_LOG_FILTER
    );
}
