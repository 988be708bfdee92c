// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line argument parsing.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::config::{ConfigError, ConfigFile, PaginationConfig};
use crate::pagination::ControlKind;

/// Pagination control
#[derive(Parser, Debug)]
#[command(name = "pagenation", version, about = "Pagination control for the terminal")]
pub struct Cli {
    /// Total number of items (negative values are treated as 0)
    #[arg(long, allow_negative_numbers = true)]
    pub total_items: Option<i64>,

    /// Number of items per page (must be greater than 0)
    #[arg(long, allow_negative_numbers = true)]
    pub items_per_page: Option<i64>,

    /// Identification tag attached to each page-number control
    #[arg(long)]
    pub page_number_test_id: Option<String>,

    /// TOML or JSON config file; flags override values from the file
    #[arg(long, env = "PAGENATION_CONFIG")]
    pub config: Option<PathBuf>,

    /// Click a control before rendering: previous, next, or a page number
    /// (can be specified multiple times; applied in order)
    #[arg(long = "click", value_name = "ACTION")]
    pub clicks: Vec<ClickAction>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Interactive full-screen mode
    #[arg(long)]
    pub tui: bool,
}

impl Cli {
    /// Settings given on the command line, in config-file form
    pub fn flag_overrides(&self) -> ConfigFile {
        ConfigFile {
            total_items: self.total_items,
            items_per_page: self.items_per_page,
            page_number_test_id: self.page_number_test_id.clone(),
        }
    }

    /// Build the configuration from `--config` (if any) overlaid with flags.
    pub fn resolve_config(&self) -> Result<PaginationConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        base.merge(self.flag_overrides()).try_into()
    }
}

/// Output format for the rendered controls
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Control row as text (styled when stdout is a terminal)
    #[default]
    Text,
    /// Control list as a JSON object
    Json,
}

/// Error parsing a `--click` value
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClickParseError {
    #[error("page numbers start at 1")]
    PageZero,

    #[error("unknown click target '{0}' (expected previous, next, or a page number)")]
    Unknown(String),
}

/// A click replayed from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickAction(pub ControlKind);

impl FromStr for ClickAction {
    type Err = ClickParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let target = s.trim().to_lowercase();
        let kind = match target.as_str() {
            "previous" | "prev" => ControlKind::Previous,
            "next" => ControlKind::Next,
            other => match other.parse::<usize>() {
                Ok(0) => return Err(ClickParseError::PageZero),
                Ok(page) => ControlKind::Page(page),
                Err(_) => return Err(ClickParseError::Unknown(s.to_string())),
            },
        };
        Ok(ClickAction(kind))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
