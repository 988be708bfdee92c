// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end tests for the `pagenation` binary in one-shot mode.
//!
//! Stdout is a pipe here, so text output is the plain (unstyled) row.

mod common;

use assert_cmd::Command;
use common::write_config;
use pagenation::env::{PAGENATION_CONFIG, PAGENATION_LOG};
use predicates::prelude::*;

fn pagenation() -> Command {
    let mut cmd = Command::cargo_bin("pagenation").unwrap();
    cmd.env_remove(PAGENATION_CONFIG).env_remove(PAGENATION_LOG);
    cmd
}

#[test]
fn renders_initial_row() {
    pagenation()
        .args(["--total-items", "9", "--items-per-page", "3"])
        .assert()
        .success()
        .stdout("(previous) [1] 2 3 next\n");
}

#[test]
fn replays_clicks_in_order() {
    pagenation()
        .args(["--total-items", "9", "--items-per-page", "3"])
        .args(["--click", "next", "--click", "next", "--click", "next"])
        .assert()
        .success()
        .stdout("previous 1 2 [3] (next)\n");
}

#[test]
fn previous_on_first_page_is_noop() {
    pagenation()
        .args(["--total-items", "9", "--items-per-page", "2", "--click", "previous"])
        .assert()
        .success()
        .stdout("(previous) [1] 2 3 4 5 next\n");
}

#[test]
fn json_output() {
    pagenation()
        .args(["--total-items", "9", "--items-per-page", "3", "--click", "2"])
        .args(["--page-number-test-id", "page-number", "--output-format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""current_page":2"#))
        .stdout(predicate::str::contains(r#""page_count":3"#))
        .stdout(predicate::str::contains(r#""test_id":"page-number""#));
}

#[test]
fn zero_items_disables_navigation() {
    pagenation()
        .args(["--total-items", "0", "--items-per-page", "3"])
        .assert()
        .success()
        .stdout("(previous) (next)\n");
}

#[test]
fn negative_total_is_treated_as_empty() {
    pagenation()
        .args(["--total-items", "-3", "--items-per-page", "3"])
        .assert()
        .success()
        .stdout("(previous) (next)\n");
}

#[test]
fn zero_page_size_is_an_error() {
    pagenation()
        .args(["--total-items", "9", "--items-per-page", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("items per page must be greater than zero"));
}

#[test]
fn page_count_past_limit_is_an_error() {
    pagenation()
        .args(["--total-items", "9223372036854775807", "--items-per-page", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exceeds the limit of 100000"));
}

#[test]
fn missing_page_size_is_an_error() {
    pagenation()
        .args(["--total-items", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("items_per_page"));
}

#[test]
fn out_of_range_click_warns_and_keeps_page() {
    pagenation()
        .args(["--total-items", "9", "--items-per-page", "3", "--click", "7"])
        .assert()
        .success()
        .stdout("(previous) [1] 2 3 next\n")
        .stderr(predicate::str::contains("page 7 is out of range"));
}

#[test]
fn reads_config_file() {
    let config = write_config(
        r#"
        total_items = 9
        items_per_page = 2
        "#,
    );
    pagenation()
        .args(["--config", config.path().to_str().unwrap(), "--click", "5"])
        .assert()
        .success()
        .stdout("previous 1 2 3 4 [5] (next)\n");
}

#[test]
fn reads_config_path_from_env() {
    let config = write_config(r#"{ "totalItems": 9, "itemsPerPage": 3 }"#);
    pagenation()
        .env(PAGENATION_CONFIG, config.path())
        .args(["--items-per-page", "9"])
        .assert()
        .success()
        .stdout("(previous) [1] (next)\n");
}
