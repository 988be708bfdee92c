// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for pagination integration tests.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

use pagenation::config::PaginationConfig;
use pagenation::pagination::ControlKind;
use pagenation::tui::test_helpers::Screen;

/// Identification tag used for page-number controls in tests
pub const PAGE_NUMBER_TEST_ID: &str = "page-number";

/// Total item count shared by the behavior scenarios
pub const TOTAL_ITEMS: i64 = 9;

/// Mount the component with nine items and locate the navigation controls.
pub fn render_page_numbers(items_per_page: i64) -> (Screen, ControlKind, ControlKind) {
    let config = PaginationConfig::new(TOTAL_ITEMS, items_per_page)
        .unwrap()
        .with_page_number_test_id(PAGE_NUMBER_TEST_ID);
    let screen = Screen::render(config);

    let prev_btn = screen.get_by_text("previous").unwrap();
    let next_btn = screen.get_by_text("next").unwrap();
    (screen, prev_btn, next_btn)
}

/// Create a temporary config file.
/// Detects JSON vs TOML content and uses the matching extension.
pub fn write_config(content: &str) -> NamedTempFile {
    let is_json = content.trim().starts_with('{');

    let mut file = if is_json {
        tempfile::Builder::new().suffix(".json").tempfile().unwrap()
    } else {
        tempfile::Builder::new().suffix(".toml").tempfile().unwrap()
    };

    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
